use crate::assignment::dtos::AssignmentDTO;
use bauhub_domain::{ResourceKind, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct AssignmentResponse {
    pub assignment: AssignmentDTO,
}

pub mod list_assignments {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub page: Option<i64>,
        pub per_page: Option<i64>,
        pub kind: Option<ResourceKind>,
        pub resource_id: Option<ID>,
        pub project_id: Option<ID>,
        pub crew_id: Option<ID>,
        pub active_only: Option<bool>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub items: Vec<AssignmentDTO>,
        pub total: i64,
        pub page: i64,
        pub per_page: i64,
        pub total_pages: i64,
    }
}

pub mod end_assignment {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub kind: ResourceKind,
        pub assignment_id: ID,
    }

    pub type APIResponse = AssignmentResponse;
}
