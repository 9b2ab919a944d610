use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::form::FormFields;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};

/// A complete worksheet run described as a TOML file, an alternative to
/// spelling the same run out in CLI arguments.
///
/// ```toml
/// [backend]
/// base_url = "http://localhost:8080"
///
/// [output]
/// path = "./output"
///
/// [request]
/// professor = "Ion Pop"
/// course = "Data Structures"
/// assistant = "Maria Enache"
/// place = "Room 101"
/// from_date = "2024-10-01"
/// to_date = "2025-02-01"
/// groups = ["30424", "30425"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetJob {
    pub backend: BackendConfig,
    pub output: OutputConfig,
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    pub professor: Option<String>,
    pub course: Option<String>,
    pub assistant: Option<String>,
    pub place: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl WorksheetJob {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let job: WorksheetJob = toml::from_str(&content)?;
        Ok(job)
    }

    pub fn form_fields(&self) -> FormFields {
        FormFields {
            professor_name: self.request.professor.clone().unwrap_or_default(),
            course_name: self.request.course.clone().unwrap_or_default(),
            assistant_name: self.request.assistant.clone().unwrap_or_default(),
            place: self.request.place.clone().unwrap_or_default(),
            from_date: self.request.from_date,
            to_date: self.request.to_date,
        }
    }
}

impl ConfigProvider for WorksheetJob {
    fn api_base_url(&self) -> &str {
        &self.backend.base_url
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}

impl Validate for WorksheetJob {
    fn validate(&self) -> Result<()> {
        validate_url("backend.base_url", &self.backend.base_url)?;
        validate_path("output.path", &self.output.path)?;
        for (i, code) in self.request.groups.iter().enumerate() {
            validate_non_empty_string(&format!("request.groups[{}]", i), code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[backend]
base_url = "http://localhost:8080"
timeout_seconds = 30

[output]
path = "./output"

[request]
professor = "Ion Pop"
course = "Data Structures"
assistant = "Maria Enache"
place = "Room 101"
from_date = "2024-10-01"
to_date = "2025-02-01"
groups = ["30424", "30425"]
"#;

    #[test]
    fn test_parse_full_job() {
        let job: WorksheetJob = toml::from_str(SAMPLE).unwrap();

        assert_eq!(job.backend.base_url, "http://localhost:8080");
        assert_eq!(job.backend.timeout_seconds, Some(30));
        assert_eq!(job.request.groups, vec!["30424", "30425"]);
        assert!(job.validate().is_ok());

        let fields = job.form_fields();
        assert_eq!(fields.course_name, "Data Structures");
        assert_eq!(fields.from_date, NaiveDate::from_ymd_opt(2024, 10, 1));
    }

    #[test]
    fn test_missing_request_fields_default_to_empty() {
        let job: WorksheetJob = toml::from_str(
            r#"
[backend]
base_url = "http://localhost:8080"

[output]
path = "./output"

[request]
groups = []
"#,
        )
        .unwrap();

        let fields = job.form_fields();
        assert_eq!(fields.professor_name, "");
        assert!(fields.from_date.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_group_code() {
        let mut job: WorksheetJob = toml::from_str(SAMPLE).unwrap();
        job.request.groups.push("  ".to_string());
        assert!(job.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut job: WorksheetJob = toml::from_str(SAMPLE).unwrap();
        job.backend.base_url = "ftp://backend".to_string();
        assert!(job.validate().is_err());
    }
}
