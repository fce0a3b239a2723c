use super::IVehicleDocumentRepo;
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::VehicleDocument;

pub struct InMemoryVehicleDocumentRepo {
    documents: std::sync::Mutex<Vec<VehicleDocument>>,
}

impl InMemoryVehicleDocumentRepo {
    pub fn new() -> Self {
        Self {
            documents: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IVehicleDocumentRepo for InMemoryVehicleDocumentRepo {
    async fn insert(&self, document: &VehicleDocument) -> anyhow::Result<()> {
        insert(document, &self.documents);
        Ok(())
    }

    async fn find_with_expiry(&self) -> anyhow::Result<Vec<VehicleDocument>> {
        Ok(find_by(&self.documents, |d| d.expiry_date.is_some()))
    }
}
