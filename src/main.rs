use std::time::Duration;

use clap::Parser;
use worksheet_gen::domain::ports::ConfigProvider;
use worksheet_gen::utils::{logger, validation::Validate};
use worksheet_gen::{
    CliConfig, FormFields, HttpGateway, LocalStorage, SubmitOutcome, WorksheetJob, WorksheetSession,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting worksheet-gen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let job_path = cli.config.clone();
    let (outcome, output_dir) = match job_path {
        Some(path) => {
            let job = match WorksheetJob::from_file(&path) {
                Ok(job) => job,
                Err(e) => {
                    tracing::error!("Failed to load job file {}: {}", path, e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = job.validate() {
                tracing::error!("Job file validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            let output_dir = job.output_path().to_string();
            let timeout = job.backend.timeout_seconds;
            let fields = job.form_fields();
            let group_codes = job.request.groups.clone();
            (run(job, timeout, fields, group_codes).await, output_dir)
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            let output_dir = cli.output_path().to_string();
            let timeout = cli.timeout_seconds;
            let fields = cli.form_fields();
            let group_codes = cli.groups.clone();
            (run(cli, timeout, fields, group_codes).await, output_dir)
        }
    };

    match outcome {
        Ok(SubmitOutcome::Saved { file_name }) => {
            tracing::info!("✅ Worksheet generated successfully!");
            println!("✅ Worksheet generated successfully!");
            println!("📁 Saved to: {}/{}", output_dir, file_name);
        }
        Ok(SubmitOutcome::Rejected(messages)) => {
            tracing::warn!("Submission rejected with {} validation errors", messages.len());
            eprintln!("❌ The form is incomplete:");
            for message in &messages {
                eprintln!("   - {}", message);
            }
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!("❌ Worksheet generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run<C: ConfigProvider>(
    config: C,
    timeout_seconds: Option<u64>,
    fields: FormFields,
    group_codes: Vec<String>,
) -> worksheet_gen::Result<SubmitOutcome> {
    let gateway = match timeout_seconds {
        Some(secs) => HttpGateway::with_timeout(config.api_base_url(), Duration::from_secs(secs))?,
        None => HttpGateway::new(config.api_base_url()),
    };
    let storage = LocalStorage::new(config.output_path().to_string());

    let mut session = WorksheetSession::new(gateway, storage, config);
    session.load_catalogs().await?;

    if !fields.professor_name.is_empty() {
        session.select_professor(&fields.professor_name).await?;
    }
    for code in &group_codes {
        session.add_group(code);
    }

    session.submit(&fields).await
}
