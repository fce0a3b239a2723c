use crate::assignment::dtos::AssignmentDTO;
use crate::vehicle::dtos::VehicleDTO;
use bauhub_domain::{EquipmentStatus, Vehicle, VehicleAssignment, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct VehicleResponse {
    pub vehicle: VehicleDTO,
}

impl VehicleResponse {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle: VehicleDTO::new(vehicle),
        }
    }
}

pub mod list_vehicles {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub page: Option<i64>,
        pub per_page: Option<i64>,
        pub r#type: Option<String>,
        pub status: Option<String>,
        pub search: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub items: Vec<VehicleDTO>,
        pub total: i64,
        pub page: i64,
        pub per_page: i64,
        pub total_pages: i64,
    }
}

pub mod create_vehicle {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub license_plate: String,
        pub make: Option<String>,
        pub model: Option<String>,
        pub r#type: Option<String>,
        pub status: Option<EquipmentStatus>,
        pub fuel_type: Option<String>,
        pub rental_cost_per_day_eur: Option<f64>,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod get_vehicle {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub vehicle: VehicleDTO,
        pub current_assignment: Option<AssignmentDTO>,
    }

    impl APIResponse {
        pub fn new(vehicle: Vehicle, current_assignment: Option<VehicleAssignment>) -> Self {
            Self {
                vehicle: VehicleDTO::new(vehicle),
                current_assignment: current_assignment.map(AssignmentDTO::from_vehicle),
            }
        }
    }
}

pub mod update_vehicle {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub license_plate: Option<String>,
        pub make: Option<String>,
        pub model: Option<String>,
        pub r#type: Option<String>,
        pub status: Option<EquipmentStatus>,
        pub fuel_type: Option<String>,
        pub rental_cost_per_day_eur: Option<f64>,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod delete_vehicle {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    pub type APIResponse = VehicleResponse;
}
