use super::{IMaterialAllocationRepo, IMaterialOrderRepo};
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::{MaterialAllocation, MaterialOrder, ID};

pub struct InMemoryMaterialOrderRepo {
    orders: std::sync::Mutex<Vec<MaterialOrder>>,
}

impl InMemoryMaterialOrderRepo {
    pub fn new() -> Self {
        Self {
            orders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMaterialOrderRepo for InMemoryMaterialOrderRepo {
    async fn insert(&self, order: &MaterialOrder) -> anyhow::Result<()> {
        insert(order, &self.orders);
        Ok(())
    }

    async fn find_awaiting_delivery(&self) -> anyhow::Result<Vec<MaterialOrder>> {
        Ok(find_by(&self.orders, |o| {
            o.status.awaits_delivery() && o.expected_delivery_date.is_some()
        }))
    }
}

pub struct InMemoryMaterialAllocationRepo {
    allocations: std::sync::Mutex<Vec<MaterialAllocation>>,
}

impl InMemoryMaterialAllocationRepo {
    pub fn new() -> Self {
        Self {
            allocations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMaterialAllocationRepo for InMemoryMaterialAllocationRepo {
    async fn insert(&self, allocation: &MaterialAllocation) -> anyhow::Result<()> {
        insert(allocation, &self.allocations);
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<MaterialAllocation>> {
        let mut allocations = find_by(&self.allocations, |a| &a.project_id == project_id);
        allocations.sort_by(|a, b| b.allocated_at.cmp(&a.allocated_at));
        Ok(allocations)
    }
}
