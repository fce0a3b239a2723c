use bauhub_domain::{EquipmentAssignment, ResourceKind, VehicleAssignment, ID};
use serde::{Deserialize, Serialize};

/// One wire shape for equipment and vehicle assignments; `resource_kind`
/// tells them apart.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssignmentDTO {
    pub id: ID,
    pub resource_kind: ResourceKind,
    pub resource_id: ID,
    pub project_id: ID,
    pub crew_id: Option<ID>,
    pub from_ts: i64,
    pub to_ts: Option<i64>,
    pub is_permanent: bool,
    pub rental_cost_per_day_eur: f64,
    pub notes: String,
    pub created_at: i64,
}

impl AssignmentDTO {
    pub fn from_equipment(assignment: EquipmentAssignment) -> Self {
        Self {
            id: assignment.id,
            resource_kind: ResourceKind::Equipment,
            resource_id: assignment.equipment_id,
            project_id: assignment.project_id,
            crew_id: assignment.crew_id,
            from_ts: assignment.from_ts,
            to_ts: assignment.to_ts,
            is_permanent: assignment.is_permanent,
            rental_cost_per_day_eur: assignment.rental_cost_per_day_eur,
            notes: assignment.notes,
            created_at: assignment.created_at,
        }
    }

    pub fn from_vehicle(assignment: VehicleAssignment) -> Self {
        Self {
            id: assignment.id,
            resource_kind: ResourceKind::Vehicle,
            resource_id: assignment.vehicle_id,
            project_id: assignment.project_id,
            crew_id: assignment.crew_id,
            from_ts: assignment.from_ts,
            to_ts: assignment.to_ts,
            is_permanent: assignment.is_permanent,
            rental_cost_per_day_eur: assignment.rental_cost_per_day_eur,
            notes: assignment.notes,
            created_at: assignment.created_at,
        }
    }
}
