use crate::assignment::dtos::AssignmentDTO;
use crate::equipment::dtos::EquipmentDTO;
use bauhub_domain::{Equipment, EquipmentAssignment, EquipmentStatus, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize)]
pub struct EquipmentResponse {
    pub equipment: EquipmentDTO,
}

impl EquipmentResponse {
    pub fn new(equipment: Equipment) -> Self {
        Self {
            equipment: EquipmentDTO::new(equipment),
        }
    }
}

pub mod list_equipment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub page: Option<i64>,
        pub per_page: Option<i64>,
        pub r#type: Option<String>,
        pub status: Option<String>,
        pub owned: Option<bool>,
        pub search: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub items: Vec<EquipmentDTO>,
        pub total: i64,
        pub page: i64,
        pub per_page: i64,
        pub total_pages: i64,
    }
}

pub mod create_equipment {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        pub r#type: String,
        pub inventory_no: Option<String>,
        pub owned: Option<bool>,
        pub status: Option<EquipmentStatus>,
        pub rental_cost_per_day_eur: Option<f64>,
        pub purchase_date: Option<NaiveDate>,
        pub warranty_until: Option<NaiveDate>,
        pub description: Option<String>,
    }

    pub type APIResponse = EquipmentResponse;
}

pub mod get_equipment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub equipment_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub equipment: EquipmentDTO,
        pub current_assignment: Option<AssignmentDTO>,
        pub assignments_count: usize,
    }

    impl APIResponse {
        pub fn new(
            equipment: Equipment,
            current_assignment: Option<EquipmentAssignment>,
            assignments_count: usize,
        ) -> Self {
            Self {
                equipment: EquipmentDTO::new(equipment),
                current_assignment: current_assignment.map(AssignmentDTO::from_equipment),
                assignments_count,
            }
        }
    }
}

pub mod update_equipment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub equipment_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: Option<String>,
        pub r#type: Option<String>,
        pub inventory_no: Option<String>,
        pub owned: Option<bool>,
        pub status: Option<EquipmentStatus>,
        pub rental_cost_per_day_eur: Option<f64>,
        pub purchase_date: Option<NaiveDate>,
        pub warranty_until: Option<NaiveDate>,
        pub description: Option<String>,
    }

    pub type APIResponse = EquipmentResponse;
}

pub mod delete_equipment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub equipment_id: ID,
    }

    pub type APIResponse = EquipmentResponse;
}

pub mod equipment_analytics {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub project_id: Option<ID>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub total_units: usize,
        /// Share of active units currently holding an assignment, 0..=1
        pub utilization_rate: f64,
        pub status_distribution: HashMap<String, usize>,
        pub type_distribution: HashMap<String, usize>,
        pub assignments_total: usize,
        pub assignments_active: usize,
        pub rental_cost_per_day_total_eur: f64,
    }
}
