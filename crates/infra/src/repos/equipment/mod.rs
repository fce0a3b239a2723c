mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{EquipmentFilters, PageQuery};
use bauhub_domain::{Equipment, ID};
pub use inmemory::InMemoryEquipmentRepo;
pub use postgres::PostgresEquipmentRepo;

#[async_trait::async_trait]
pub trait IEquipmentRepo: Send + Sync {
    async fn insert(&self, equipment: &Equipment) -> anyhow::Result<()>;
    async fn save(&self, equipment: &Equipment) -> anyhow::Result<()>;
    /// Soft-deleted units are invisible here.
    async fn find(&self, equipment_id: &ID) -> Option<Equipment>;
    async fn find_all_active(&self) -> anyhow::Result<Vec<Equipment>>;
    /// Returns the requested page together with the total match count.
    async fn list(
        &self,
        filters: &EquipmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Equipment>, i64)>;
    /// Marks the unit inactive instead of deleting the row. Returns the
    /// unit, or None when it does not exist or is already inactive.
    async fn soft_delete(&self, equipment_id: &ID, updated_at: i64) -> Option<Equipment>;
}
