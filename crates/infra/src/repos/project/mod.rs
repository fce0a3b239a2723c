mod inmemory;
mod postgres;

use bauhub_domain::{Crew, Project, ID};
pub use inmemory::{InMemoryCrewRepo, InMemoryProjectRepo};
pub use postgres::{PostgresCrewRepo, PostgresProjectRepo};

#[async_trait::async_trait]
pub trait IProjectRepo: Send + Sync {
    async fn insert(&self, project: &Project) -> anyhow::Result<()>;
    async fn save(&self, project: &Project) -> anyhow::Result<()>;
    async fn find(&self, project_id: &ID) -> Option<Project>;
    /// Resolves the responsible project manager, if one is assigned.
    async fn find_pm_user_id(&self, project_id: &ID) -> Option<ID>;
    /// Projects in a pre-completion status with a start date and a PM,
    /// candidates for start reminders.
    async fn find_with_upcoming_start(&self) -> anyhow::Result<Vec<Project>>;
    /// Active projects with a planned end date and a PM, candidates for
    /// deadline reminders.
    async fn find_active_with_end_plan(&self) -> anyhow::Result<Vec<Project>>;
}

#[async_trait::async_trait]
pub trait ICrewRepo: Send + Sync {
    async fn insert(&self, crew: &Crew) -> anyhow::Result<()>;
    async fn find(&self, crew_id: &ID) -> Option<Crew>;
    /// A crew only counts when it belongs to the given project.
    async fn find_in_project(&self, crew_id: &ID, project_id: &ID) -> Option<Crew>;
}
