use super::{IDocumentRepo, IProjectPlanRepo};
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::{Document, ProjectPlan, ID};

pub struct InMemoryDocumentRepo {
    documents: std::sync::Mutex<Vec<Document>>,
}

impl InMemoryDocumentRepo {
    pub fn new() -> Self {
        Self {
            documents: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IDocumentRepo for InMemoryDocumentRepo {
    async fn insert(&self, document: &Document) -> anyhow::Result<()> {
        insert(document, &self.documents);
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<Document>> {
        let mut documents = find_by(&self.documents, |d| {
            &d.project_id == project_id && d.is_active
        });
        documents.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        Ok(documents)
    }
}

pub struct InMemoryProjectPlanRepo {
    plans: std::sync::Mutex<Vec<ProjectPlan>>,
}

impl InMemoryProjectPlanRepo {
    pub fn new() -> Self {
        Self {
            plans: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IProjectPlanRepo for InMemoryProjectPlanRepo {
    async fn insert(&self, plan: &ProjectPlan) -> anyhow::Result<()> {
        insert(plan, &self.plans);
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<ProjectPlan>> {
        let mut plans = find_by(&self.plans, |p| &p.project_id == project_id);
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }
}
