mod inmemory;
mod postgres;

use bauhub_domain::VehicleDocument;
pub use inmemory::InMemoryVehicleDocumentRepo;
pub use postgres::PostgresVehicleDocumentRepo;

#[async_trait::async_trait]
pub trait IVehicleDocumentRepo: Send + Sync {
    async fn insert(&self, document: &VehicleDocument) -> anyhow::Result<()>;
    async fn find_with_expiry(&self) -> anyhow::Result<Vec<VehicleDocument>>;
}
