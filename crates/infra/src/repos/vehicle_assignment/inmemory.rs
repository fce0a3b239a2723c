use super::IVehicleAssignmentRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{AssignmentFilters, PageQuery};
use bauhub_domain::{VehicleAssignment, ID};

pub struct InMemoryVehicleAssignmentRepo {
    assignments: std::sync::Mutex<Vec<VehicleAssignment>>,
}

impl InMemoryVehicleAssignmentRepo {
    pub fn new() -> Self {
        Self {
            assignments: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IVehicleAssignmentRepo for InMemoryVehicleAssignmentRepo {
    async fn try_insert(&self, assignment: &VehicleAssignment) -> anyhow::Result<bool> {
        let mut assignments = self.assignments.lock().unwrap();
        let taken = assignments
            .iter()
            .any(|a| a.vehicle_id == assignment.vehicle_id && a.to_ts.is_none());
        if taken {
            return Ok(false);
        }
        assignments.push(assignment.clone());
        Ok(true)
    }

    async fn find(&self, assignment_id: &ID) -> Option<VehicleAssignment> {
        find(assignment_id, &self.assignments)
    }

    async fn find_active_by_vehicle(&self, vehicle_id: &ID) -> Option<VehicleAssignment> {
        find_by(&self.assignments, |a| {
            &a.vehicle_id == vehicle_id && a.to_ts.is_none()
        })
        .into_iter()
        .next()
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<VehicleAssignment>> {
        let mut assignments = find_by(&self.assignments, |a| &a.project_id == project_id);
        assignments.sort_by(|a, b| b.from_ts.cmp(&a.from_ts));
        Ok(assignments)
    }

    async fn list(
        &self,
        filters: &AssignmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<VehicleAssignment>, i64)> {
        let mut items = find_by(&self.assignments, |a| {
            filters
                .resource_id
                .as_ref()
                .map_or(true, |id| &a.vehicle_id == id)
                && filters
                    .project_id
                    .as_ref()
                    .map_or(true, |id| &a.project_id == id)
                && filters
                    .crew_id
                    .as_ref()
                    .map_or(true, |id| a.crew_id.as_ref() == Some(id))
                && (!filters.active_only || a.to_ts.is_none())
        });
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(items, page.offset, page.limit))
    }

    async fn end(&self, assignment_id: &ID, to_ts: i64) -> Option<VehicleAssignment> {
        let active = find(assignment_id, &self.assignments)
            .filter(|a: &VehicleAssignment| a.to_ts.is_none())?;
        update_one(&active.id, &self.assignments, |a| {
            a.to_ts = Some(to_ts);
        })
    }
}
