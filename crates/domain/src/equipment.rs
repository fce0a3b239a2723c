use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    InUse,
    Maintenance,
    Broken,
    Retired,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Maintenance => "maintenance",
            Self::Broken => "broken",
            Self::Retired => "retired",
        }
    }
}

impl FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "in_use" => Ok(Self::InUse),
            "maintenance" => Ok(Self::Maintenance),
            "broken" => Ok(Self::Broken),
            "retired" => Ok(Self::Retired),
            _ => Err(format!("Invalid equipment status: {}", s)),
        }
    }
}

impl Default for EquipmentStatus {
    fn default() -> Self {
        Self::Available
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: ID,
    pub name: String,
    pub r#type: String,
    pub inventory_no: String,
    pub owned: bool,
    pub status: EquipmentStatus,
    pub rental_cost_per_day_eur: f64,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub description: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entity<ID> for Equipment {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Certificates, inspection reports and similar papers attached to a unit.
/// Rows with an `expiry_date` feed the document expiration reminders.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentDocument {
    pub id: ID,
    pub equipment_id: ID,
    pub document_type: String,
    pub expiry_date: Option<NaiveDate>,
}

impl Entity<ID> for EquipmentDocument {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
