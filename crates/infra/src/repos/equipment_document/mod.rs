mod inmemory;
mod postgres;

use bauhub_domain::EquipmentDocument;
pub use inmemory::InMemoryEquipmentDocumentRepo;
pub use postgres::PostgresEquipmentDocumentRepo;

#[async_trait::async_trait]
pub trait IEquipmentDocumentRepo: Send + Sync {
    async fn insert(&self, document: &EquipmentDocument) -> anyhow::Result<()>;
    /// All documents carrying an expiry date, the input set of the
    /// expiration reminders.
    async fn find_with_expiry(&self) -> anyhow::Result<Vec<EquipmentDocument>>;
}
