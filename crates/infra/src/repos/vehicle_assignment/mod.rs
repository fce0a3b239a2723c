mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{AssignmentFilters, PageQuery};
use bauhub_domain::{VehicleAssignment, ID};
pub use inmemory::InMemoryVehicleAssignmentRepo;
pub use postgres::PostgresVehicleAssignmentRepo;

#[async_trait::async_trait]
pub trait IVehicleAssignmentRepo: Send + Sync {
    /// See `IEquipmentAssignmentRepo::try_insert`.
    async fn try_insert(&self, assignment: &VehicleAssignment) -> anyhow::Result<bool>;
    async fn find(&self, assignment_id: &ID) -> Option<VehicleAssignment>;
    async fn find_active_by_vehicle(&self, vehicle_id: &ID) -> Option<VehicleAssignment>;
    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<VehicleAssignment>>;
    async fn list(
        &self,
        filters: &AssignmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<VehicleAssignment>, i64)>;
    async fn end(&self, assignment_id: &ID, to_ts: i64) -> Option<VehicleAssignment>;
}
