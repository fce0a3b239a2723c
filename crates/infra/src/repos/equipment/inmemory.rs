use super::IEquipmentRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{EquipmentFilters, PageQuery};
use bauhub_domain::{Equipment, ID};

pub struct InMemoryEquipmentRepo {
    equipment: std::sync::Mutex<Vec<Equipment>>,
}

impl InMemoryEquipmentRepo {
    pub fn new() -> Self {
        Self {
            equipment: std::sync::Mutex::new(Vec::new()),
        }
    }
}

fn matches_search(e: &Equipment, search: &str) -> bool {
    let needle = search.to_lowercase();
    e.name.to_lowercase().contains(&needle)
        || e.inventory_no.to_lowercase().contains(&needle)
        || e.r#type.to_lowercase().contains(&needle)
        || e.description.to_lowercase().contains(&needle)
}

#[async_trait::async_trait]
impl IEquipmentRepo for InMemoryEquipmentRepo {
    async fn insert(&self, equipment: &Equipment) -> anyhow::Result<()> {
        insert(equipment, &self.equipment);
        Ok(())
    }

    async fn save(&self, equipment: &Equipment) -> anyhow::Result<()> {
        save(equipment, &self.equipment);
        Ok(())
    }

    async fn find(&self, equipment_id: &ID) -> Option<Equipment> {
        find(equipment_id, &self.equipment).filter(|e: &Equipment| e.is_active)
    }

    async fn find_all_active(&self) -> anyhow::Result<Vec<Equipment>> {
        Ok(find_by(&self.equipment, |e| e.is_active))
    }

    async fn list(
        &self,
        filters: &EquipmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Equipment>, i64)> {
        let mut items = find_by(&self.equipment, |e| {
            e.is_active
                && filters
                    .equipment_type
                    .as_ref()
                    .map_or(true, |t| &e.r#type == t)
                && filters.status.map_or(true, |s| e.status == s)
                && filters.owned.map_or(true, |o| e.owned == o)
                && filters
                    .search
                    .as_ref()
                    .map_or(true, |s| matches_search(e, s))
                && !filters.exclude_ids.contains(&e.id)
        });
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(items, page.offset, page.limit))
    }

    async fn soft_delete(&self, equipment_id: &ID, updated_at: i64) -> Option<Equipment> {
        let found = find(equipment_id, &self.equipment).filter(|e: &Equipment| e.is_active)?;
        update_one(&found.id, &self.equipment, |e| {
            e.is_active = false;
            e.updated_at = updated_at;
        })
    }
}
