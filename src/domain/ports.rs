use crate::domain::model::{DocumentRequest, Group, Professor, ProfessorRank, Student};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// The backend contract: four read queries and one write. The backend
/// itself is opaque; all the client sees are these request shapes.
#[async_trait]
pub trait WorksheetGateway: Send + Sync {
    async fn fetch_groups(&self) -> Result<Vec<Group>>;
    async fn fetch_students(&self, group_code: &str) -> Result<Vec<Student>>;
    async fn fetch_professors(&self, rank: ProfessorRank) -> Result<Vec<Professor>>;
    async fn fetch_courses(&self, professor_id: i64) -> Result<Vec<String>>;
    async fn generate_worksheet(&self, request: &DocumentRequest) -> Result<Vec<u8>>;
}
