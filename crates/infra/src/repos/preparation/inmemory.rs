use super::{IFacilityRepo, IHousingUnitRepo, IWorkEntryRepo};
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::{Facility, HousingUnit, WorkEntry, ID};

pub struct InMemoryFacilityRepo {
    facilities: std::sync::Mutex<Vec<Facility>>,
}

impl InMemoryFacilityRepo {
    pub fn new() -> Self {
        Self {
            facilities: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IFacilityRepo for InMemoryFacilityRepo {
    async fn insert(&self, facility: &Facility) -> anyhow::Result<()> {
        insert(facility, &self.facilities);
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<Facility>> {
        Ok(find_by(&self.facilities, |f| &f.project_id == project_id))
    }
}

pub struct InMemoryHousingUnitRepo {
    units: std::sync::Mutex<Vec<HousingUnit>>,
}

impl InMemoryHousingUnitRepo {
    pub fn new() -> Self {
        Self {
            units: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IHousingUnitRepo for InMemoryHousingUnitRepo {
    async fn insert(&self, unit: &HousingUnit) -> anyhow::Result<()> {
        insert(unit, &self.units);
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<HousingUnit>> {
        Ok(find_by(&self.units, |u| &u.project_id == project_id))
    }
}

pub struct InMemoryWorkEntryRepo {
    entries: std::sync::Mutex<Vec<WorkEntry>>,
}

impl InMemoryWorkEntryRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IWorkEntryRepo for InMemoryWorkEntryRepo {
    async fn insert(&self, entry: &WorkEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<WorkEntry>> {
        Ok(find_by(&self.entries, |e| &e.project_id == project_id))
    }
}
