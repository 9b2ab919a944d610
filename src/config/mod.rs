pub mod toml_config;

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::form::FormFields;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "worksheet-gen")]
#[command(about = "Generates work-safety worksheets through the worksheet backend")]
pub struct CliConfig {
    /// Base URL of the worksheet backend.
    #[arg(long, default_value = "http://localhost:8080")]
    pub api_base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Optional per-request timeout; the transport default applies otherwise.
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML job file; replaces the argument-supplied run below.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub professor: Option<String>,

    #[arg(long)]
    pub course: Option<String>,

    #[arg(long)]
    pub assistant: Option<String>,

    #[arg(long)]
    pub place: Option<String>,

    #[arg(long)]
    pub from_date: Option<NaiveDate>,

    #[arg(long)]
    pub to_date: Option<NaiveDate>,

    /// Group codes to put on the worksheet, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub groups: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn form_fields(&self) -> FormFields {
        FormFields {
            professor_name: self.professor.clone().unwrap_or_default(),
            course_name: self.course.clone().unwrap_or_default(),
            assistant_name: self.assistant.clone().unwrap_or_default(),
            place: self.place.clone().unwrap_or_default(),
            from_date: self.from_date,
            to_date: self.to_date,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
