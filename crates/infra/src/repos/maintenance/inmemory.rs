use super::IMaintenanceRepo;
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::{MaintenanceSchedule, MaintenanceStatus};

pub struct InMemoryMaintenanceRepo {
    schedules: std::sync::Mutex<Vec<MaintenanceSchedule>>,
}

impl InMemoryMaintenanceRepo {
    pub fn new() -> Self {
        Self {
            schedules: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IMaintenanceRepo for InMemoryMaintenanceRepo {
    async fn insert(&self, schedule: &MaintenanceSchedule) -> anyhow::Result<()> {
        insert(schedule, &self.schedules);
        Ok(())
    }

    async fn find_scheduled(&self) -> anyhow::Result<Vec<MaintenanceSchedule>> {
        Ok(find_by(&self.schedules, |s| {
            s.status == MaintenanceStatus::Scheduled
        }))
    }
}
