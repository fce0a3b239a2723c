use bauhub_domain::{Equipment, EquipmentStatus, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EquipmentDTO {
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

impl EquipmentDTO {
    pub fn new(equipment: Equipment) -> Self {
        Self {
            id: equipment.id,
            name: equipment.name,
            r#type: equipment.r#type,
            inventory_no: equipment.inventory_no,
            owned: equipment.owned,
            status: equipment.status,
            rental_cost_per_day_eur: equipment.rental_cost_per_day_eur,
            purchase_date: equipment.purchase_date,
            warranty_until: equipment.warranty_until,
            description: equipment.description,
            is_active: equipment.is_active,
            created_at: equipment.created_at,
            updated_at: equipment.updated_at,
        }
    }
}
