use crate::equipment::EquipmentStatus;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: ID,
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub r#type: String,
    pub status: EquipmentStatus,
    pub fuel_type: String,
    pub rental_cost_per_day_eur: f64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entity<ID> for Vehicle {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDocument {
    pub id: ID,
    pub vehicle_id: ID,
    pub document_type: String,
    pub expiry_date: Option<NaiveDate>,
}

impl Entity<ID> for VehicleDocument {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
