use super::IVehicleRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{PageQuery, VehicleFilters};
use bauhub_domain::{Vehicle, ID};

pub struct InMemoryVehicleRepo {
    vehicles: std::sync::Mutex<Vec<Vehicle>>,
}

impl InMemoryVehicleRepo {
    pub fn new() -> Self {
        Self {
            vehicles: std::sync::Mutex::new(Vec::new()),
        }
    }
}

fn matches_search(v: &Vehicle, search: &str) -> bool {
    let needle = search.to_lowercase();
    v.license_plate.to_lowercase().contains(&needle)
        || v.make.to_lowercase().contains(&needle)
        || v.model.to_lowercase().contains(&needle)
}

#[async_trait::async_trait]
impl IVehicleRepo for InMemoryVehicleRepo {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        insert(vehicle, &self.vehicles);
        Ok(())
    }

    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        save(vehicle, &self.vehicles);
        Ok(())
    }

    async fn find(&self, vehicle_id: &ID) -> Option<Vehicle> {
        find(vehicle_id, &self.vehicles).filter(|v: &Vehicle| v.is_active)
    }

    async fn list(
        &self,
        filters: &VehicleFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Vehicle>, i64)> {
        let mut items = find_by(&self.vehicles, |v| {
            v.is_active
                && filters
                    .vehicle_type
                    .as_ref()
                    .map_or(true, |t| &v.r#type == t)
                && filters.status.map_or(true, |s| v.status == s)
                && filters
                    .search
                    .as_ref()
                    .map_or(true, |s| matches_search(v, s))
        });
        items.sort_by(|a, b| a.license_plate.cmp(&b.license_plate));
        Ok(paginate(items, page.offset, page.limit))
    }

    async fn soft_delete(&self, vehicle_id: &ID, updated_at: i64) -> Option<Vehicle> {
        let found = find(vehicle_id, &self.vehicles).filter(|v: &Vehicle| v.is_active)?;
        update_one(&found.id, &self.vehicles, |v| {
            v.is_active = false;
            v.updated_at = updated_at;
        })
    }
}
