mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{AssignmentFilters, PageQuery};
use bauhub_domain::{EquipmentAssignment, ID};
pub use inmemory::InMemoryEquipmentAssignmentRepo;
pub use postgres::PostgresEquipmentAssignmentRepo;

#[async_trait::async_trait]
pub trait IEquipmentAssignmentRepo: Send + Sync {
    /// Atomic conditional insert: the row is only written when the unit
    /// holds no active assignment. Returns false when the slot was taken.
    async fn try_insert(&self, assignment: &EquipmentAssignment) -> anyhow::Result<bool>;
    async fn find(&self, assignment_id: &ID) -> Option<EquipmentAssignment>;
    async fn find_active_by_equipment(&self, equipment_id: &ID) -> Option<EquipmentAssignment>;
    async fn find_active_equipment_ids(&self) -> anyhow::Result<Vec<ID>>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<EquipmentAssignment>>;
    async fn list(
        &self,
        filters: &AssignmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<EquipmentAssignment>, i64)>;
    /// Closes an active assignment. None when it does not exist or is
    /// already closed.
    async fn end(&self, assignment_id: &ID, to_ts: i64) -> Option<EquipmentAssignment>;
}
