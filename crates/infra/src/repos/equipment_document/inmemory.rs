use super::IEquipmentDocumentRepo;
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::EquipmentDocument;

pub struct InMemoryEquipmentDocumentRepo {
    documents: std::sync::Mutex<Vec<EquipmentDocument>>,
}

impl InMemoryEquipmentDocumentRepo {
    pub fn new() -> Self {
        Self {
            documents: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEquipmentDocumentRepo for InMemoryEquipmentDocumentRepo {
    async fn insert(&self, document: &EquipmentDocument) -> anyhow::Result<()> {
        insert(document, &self.documents);
        Ok(())
    }

    async fn find_with_expiry(&self) -> anyhow::Result<Vec<EquipmentDocument>> {
        Ok(find_by(&self.documents, |d| d.expiry_date.is_some()))
    }
}
