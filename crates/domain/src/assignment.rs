use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Equipment,
    Vehicle,
    Material,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Vehicle => "vehicle",
            Self::Material => "material",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equipment" => Ok(Self::Equipment),
            "vehicle" => Ok(Self::Vehicle),
            "material" => Ok(Self::Material),
            _ => Err(format!("Invalid resource kind: {}", s)),
        }
    }
}

/// Assignment of one equipment unit to a project, optionally to a crew.
/// An assignment with no `to_ts` is active; at most one active assignment
/// may exist per unit ("1 equipment = 1 crew").
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentAssignment {
    pub id: ID,
    pub equipment_id: ID,
    pub project_id: ID,
    pub crew_id: Option<ID>,
    pub from_ts: i64,
    pub to_ts: Option<i64>,
    pub is_permanent: bool,
    pub rental_cost_per_day_eur: f64,
    pub notes: String,
    pub created_at: i64,
}

impl EquipmentAssignment {
    pub fn is_active(&self) -> bool {
        self.to_ts.is_none()
    }
}

impl Entity<ID> for EquipmentAssignment {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleAssignment {
    pub id: ID,
    pub vehicle_id: ID,
    pub project_id: ID,
    pub crew_id: Option<ID>,
    pub from_ts: i64,
    pub to_ts: Option<i64>,
    pub is_permanent: bool,
    pub rental_cost_per_day_eur: f64,
    pub notes: String,
    pub created_at: i64,
}

impl VehicleAssignment {
    pub fn is_active(&self) -> bool {
        self.to_ts.is_none()
    }
}

impl Entity<ID> for VehicleAssignment {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
