mod inmemory;
mod postgres;

use bauhub_domain::{MaterialAllocation, MaterialOrder, ID};
pub use inmemory::{InMemoryMaterialAllocationRepo, InMemoryMaterialOrderRepo};
pub use postgres::{PostgresMaterialAllocationRepo, PostgresMaterialOrderRepo};

#[async_trait::async_trait]
pub trait IMaterialOrderRepo: Send + Sync {
    async fn insert(&self, order: &MaterialOrder) -> anyhow::Result<()>;
    /// Orders in an active status with a known delivery date, the input
    /// set of the delivery reminders.
    async fn find_awaiting_delivery(&self) -> anyhow::Result<Vec<MaterialOrder>>;
}

#[async_trait::async_trait]
pub trait IMaterialAllocationRepo: Send + Sync {
    async fn insert(&self, allocation: &MaterialAllocation) -> anyhow::Result<()>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<MaterialAllocation>>;
}
