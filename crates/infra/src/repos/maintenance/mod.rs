mod inmemory;
mod postgres;

use bauhub_domain::MaintenanceSchedule;
pub use inmemory::InMemoryMaintenanceRepo;
pub use postgres::PostgresMaintenanceRepo;

#[async_trait::async_trait]
pub trait IMaintenanceRepo: Send + Sync {
    async fn insert(&self, schedule: &MaintenanceSchedule) -> anyhow::Result<()>;
    /// Schedules still in the `scheduled` state, the input set of the
    /// maintenance reminders.
    async fn find_scheduled(&self) -> anyhow::Result<Vec<MaintenanceSchedule>>;
}
