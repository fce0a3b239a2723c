mod inmemory;
mod postgres;

use bauhub_domain::{Document, ProjectPlan, ID};
pub use inmemory::{InMemoryDocumentRepo, InMemoryProjectPlanRepo};
pub use postgres::{PostgresDocumentRepo, PostgresProjectPlanRepo};

#[async_trait::async_trait]
pub trait IDocumentRepo: Send + Sync {
    async fn insert(&self, document: &Document) -> anyhow::Result<()>;
    /// Active documents of a project, newest upload first.
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<Document>>;
}

#[async_trait::async_trait]
pub trait IProjectPlanRepo: Send + Sync {
    async fn insert(&self, plan: &ProjectPlan) -> anyhow::Result<()>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<ProjectPlan>>;
}
