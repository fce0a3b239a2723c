mod inmemory;
mod postgres;

use bauhub_domain::{Facility, HousingUnit, WorkEntry, ID};
pub use inmemory::{InMemoryFacilityRepo, InMemoryHousingUnitRepo, InMemoryWorkEntryRepo};
pub use postgres::{PostgresFacilityRepo, PostgresHousingUnitRepo, PostgresWorkEntryRepo};

#[async_trait::async_trait]
pub trait IFacilityRepo: Send + Sync {
    async fn insert(&self, facility: &Facility) -> anyhow::Result<()>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<Facility>>;
}

#[async_trait::async_trait]
pub trait IHousingUnitRepo: Send + Sync {
    async fn insert(&self, unit: &HousingUnit) -> anyhow::Result<()>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<HousingUnit>>;
}

#[async_trait::async_trait]
pub trait IWorkEntryRepo: Send + Sync {
    async fn insert(&self, entry: &WorkEntry) -> anyhow::Result<()>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<WorkEntry>>;
}
