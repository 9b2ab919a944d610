use async_trait::async_trait;
use reqwest::Client;

use crate::domain::model::{DocumentRequest, Group, Professor, ProfessorRank, Student};
use crate::domain::ports::WorksheetGateway;
use crate::utils::error::Result;

/// reqwest-backed gateway. One base URL selects the backend host for every
/// call; routes mirror the backend's REST surface.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl WorksheetGateway for HttpGateway {
    async fn fetch_groups(&self) -> Result<Vec<Group>> {
        let url = format!("{}/group", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_students(&self, group_code: &str) -> Result<Vec<Student>> {
        let url = format!("{}/group/find-students/{}", self.base_url, group_code);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_professors(&self, rank: ProfessorRank) -> Result<Vec<Professor>> {
        let url = format!("{}/professor/{}", self.base_url, rank);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_courses(&self, professor_id: i64) -> Result<Vec<String>> {
        let url = format!("{}/professor/get-courses/{}", self.base_url, professor_id);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn generate_worksheet(&self, request: &DocumentRequest) -> Result<Vec<u8>> {
        let url = format!("{}/word", self.base_url);
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
