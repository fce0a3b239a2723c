mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{PageQuery, VehicleFilters};
use bauhub_domain::{Vehicle, ID};
pub use inmemory::InMemoryVehicleRepo;
pub use postgres::PostgresVehicleRepo;

#[async_trait::async_trait]
pub trait IVehicleRepo: Send + Sync {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()>;
    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()>;
    async fn find(&self, vehicle_id: &ID) -> Option<Vehicle>;
    async fn list(
        &self,
        filters: &VehicleFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Vehicle>, i64)>;
    async fn soft_delete(&self, vehicle_id: &ID, updated_at: i64) -> Option<Vehicle>;
}
