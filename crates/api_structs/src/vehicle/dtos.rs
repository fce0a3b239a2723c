use bauhub_domain::{EquipmentStatus, Vehicle, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VehicleDTO {
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

impl VehicleDTO {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            license_plate: vehicle.license_plate,
            make: vehicle.make,
            model: vehicle.model,
            r#type: vehicle.r#type,
            status: vehicle.status,
            fuel_type: vehicle.fuel_type,
            rental_cost_per_day_eur: vehicle.rental_cost_per_day_eur,
            is_active: vehicle.is_active,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
