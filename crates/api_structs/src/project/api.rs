use crate::assignment::dtos::AssignmentDTO;
use crate::equipment::dtos::EquipmentDTO;
use crate::project::dtos::{
    CostSection, DocumentEntryDTO, FacilityDTO, HousingUnitDTO, MaterialAllocationDTO,
    WorkEntryDTO,
};
use crate::vehicle::dtos::VehicleDTO;
use bauhub_domain::{ResourceKind, ID};
use serde::{Deserialize, Serialize};

pub mod get_project_documents {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub project_id: ID,
    }

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub page: Option<i64>,
        pub per_page: Option<i64>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub items: Vec<DocumentEntryDTO>,
        pub total: i64,
        pub page: i64,
        pub per_page: i64,
        pub total_pages: i64,
    }
}

pub mod create_project_document {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub project_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub filename: String,
        pub original_filename: Option<String>,
        pub file_type: Option<String>,
        pub file_size: Option<i64>,
        pub document_type: Option<String>,
        pub description: Option<String>,
        pub uploaded_by: Option<ID>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub document: DocumentEntryDTO,
    }
}

pub mod get_project_resources {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub project_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    pub struct EquipmentResourceDTO {
        pub assignment: AssignmentDTO,
        pub equipment: Option<EquipmentDTO>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct VehicleResourceDTO {
        pub assignment: AssignmentDTO,
        pub vehicle: Option<VehicleDTO>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub equipment: Vec<EquipmentResourceDTO>,
        pub vehicles: Vec<VehicleResourceDTO>,
        pub materials: Vec<MaterialAllocationDTO>,
    }
}

pub mod assign_project_resource {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub project_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub kind: ResourceKind,
        pub resource_id: ID,
        pub crew_id: Option<ID>,
        pub from_ts: Option<i64>,
        pub is_permanent: Option<bool>,
        pub rental_cost_per_day_eur: Option<f64>,
        pub notes: Option<String>,
        /// Only meaningful for material allocations
        pub quantity: Option<f64>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub assignment_id: ID,
        pub message: String,
    }
}

pub mod get_preparation_costs {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub project_id: Option<ID>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct ProjectBudgetDTO {
        pub id: ID,
        pub name: String,
        pub budget_eur: f64,
        pub remaining_budget_eur: f64,
        pub budget_utilized_percentage: f64,
    }

    #[derive(Deserialize, Serialize)]
    pub struct SummaryDTO {
        pub facilities: f64,
        pub housing: f64,
        pub equipment: f64,
        pub materials: f64,
        pub labor: f64,
        pub total: f64,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub project: ProjectBudgetDTO,
        pub facilities: CostSection<FacilityDTO>,
        pub housing: CostSection<HousingUnitDTO>,
        pub equipment: CostSection<AssignmentDTO>,
        pub materials: CostSection<MaterialAllocationDTO>,
        pub labor: CostSection<WorkEntryDTO>,
        pub summary: SummaryDTO,
    }
}
