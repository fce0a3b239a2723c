use super::IEquipmentAssignmentRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{AssignmentFilters, PageQuery};
use bauhub_domain::{EquipmentAssignment, ID};

pub struct InMemoryEquipmentAssignmentRepo {
    assignments: std::sync::Mutex<Vec<EquipmentAssignment>>,
}

impl InMemoryEquipmentAssignmentRepo {
    pub fn new() -> Self {
        Self {
            assignments: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEquipmentAssignmentRepo for InMemoryEquipmentAssignmentRepo {
    async fn try_insert(&self, assignment: &EquipmentAssignment) -> anyhow::Result<bool> {
        // Check and insert under one lock, mirroring the conditional
        // insert of the postgres implementation.
        let mut assignments = self.assignments.lock().unwrap();
        let taken = assignments
            .iter()
            .any(|a| a.equipment_id == assignment.equipment_id && a.to_ts.is_none());
        if taken {
            return Ok(false);
        }
        assignments.push(assignment.clone());
        Ok(true)
    }

    async fn find(&self, assignment_id: &ID) -> Option<EquipmentAssignment> {
        find(assignment_id, &self.assignments)
    }

    async fn find_active_by_equipment(&self, equipment_id: &ID) -> Option<EquipmentAssignment> {
        find_by(&self.assignments, |a| {
            &a.equipment_id == equipment_id && a.to_ts.is_none()
        })
        .into_iter()
        .next()
    }

    async fn find_active_equipment_ids(&self) -> anyhow::Result<Vec<ID>> {
        Ok(find_by(&self.assignments, |a| a.to_ts.is_none())
            .into_iter()
            .map(|a| a.equipment_id)
            .collect())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<EquipmentAssignment>> {
        let mut assignments = find_by(&self.assignments, |a| &a.project_id == project_id);
        assignments.sort_by(|a, b| b.from_ts.cmp(&a.from_ts));
        Ok(assignments)
    }

    async fn list(
        &self,
        filters: &AssignmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<EquipmentAssignment>, i64)> {
        let mut items = find_by(&self.assignments, |a| {
            filters
                .resource_id
                .as_ref()
                .map_or(true, |id| &a.equipment_id == id)
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

    async fn end(&self, assignment_id: &ID, to_ts: i64) -> Option<EquipmentAssignment> {
        let active = find(assignment_id, &self.assignments)
            .filter(|a: &EquipmentAssignment| a.to_ts.is_none())?;
        update_one(&active.id, &self.assignments, |a| {
            a.to_ts = Some(to_ts);
        })
    }
}
