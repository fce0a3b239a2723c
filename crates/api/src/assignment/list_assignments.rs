use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::AssignmentDTO;
use bauhub_api_structs::list_assignments::*;
use bauhub_api_structs::PaginationParams;
use bauhub_domain::{ResourceKind, ID};
use bauhub_infra::{AssignmentFilters, Context, PageQuery};

pub async fn list_assignments_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let pagination = PaginationParams::parse(query_params.page, query_params.per_page);
    let usecase = ListAssignmentsUseCase {
        kind: query_params.kind,
        resource_id: query_params.resource_id.clone(),
        project_id: query_params.project_id.clone(),
        crew_id: query_params.crew_id.clone(),
        active_only: query_params.active_only.unwrap_or(false),
        pagination,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                items: res.items,
                total: res.total,
                page: pagination.page,
                per_page: pagination.per_page,
                total_pages: pagination.total_pages(res.total),
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct ListAssignmentsUseCase {
    pub kind: Option<ResourceKind>,
    pub resource_id: Option<ID>,
    pub project_id: Option<ID>,
    pub crew_id: Option<ID>,
    pub active_only: bool,
    pub pagination: PaginationParams,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub items: Vec<AssignmentDTO>,
    pub total: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    MaterialHasNoAssignments,
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MaterialHasNoAssignments => Self::BadClientData(
                "Material resources are allocated, not assigned. Use the project resources endpoint."
                    .into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListAssignmentsUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "ListAssignments";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let filters = AssignmentFilters {
            resource_id: self.resource_id.clone(),
            project_id: self.project_id.clone(),
            crew_id: self.crew_id.clone(),
            active_only: self.active_only,
        };
        let page = PageQuery {
            offset: self.pagination.offset(),
            limit: self.pagination.per_page,
        };

        match self.kind {
            Some(ResourceKind::Equipment) => {
                let (items, total) = ctx
                    .repos
                    .equipment_assignments
                    .list(&filters, page)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(UseCaseResponse {
                    items: items.into_iter().map(AssignmentDTO::from_equipment).collect(),
                    total,
                })
            }
            Some(ResourceKind::Vehicle) => {
                let (items, total) = ctx
                    .repos
                    .vehicle_assignments
                    .list(&filters, page)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(UseCaseResponse {
                    items: items.into_iter().map(AssignmentDTO::from_vehicle).collect(),
                    total,
                })
            }
            Some(ResourceKind::Material) => Err(UseCaseError::MaterialHasNoAssignments),
            None => {
                // Merge both kinds: fetch everything matching, sort by
                // creation time and window afterwards.
                let all_page = PageQuery {
                    offset: 0,
                    limit: i64::MAX,
                };
                let (equipment, _) = ctx
                    .repos
                    .equipment_assignments
                    .list(&filters, all_page)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                let (vehicles, _) = ctx
                    .repos
                    .vehicle_assignments
                    .list(&filters, all_page)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;

                let mut items: Vec<AssignmentDTO> = equipment
                    .into_iter()
                    .map(AssignmentDTO::from_equipment)
                    .chain(vehicles.into_iter().map(AssignmentDTO::from_vehicle))
                    .collect();
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

                let total = items.len() as i64;
                let items = items
                    .into_iter()
                    .skip(page.offset.max(0) as usize)
                    .take(page.limit.max(0) as usize)
                    .collect();
                Ok(UseCaseResponse { items, total })
            }
        }
    }
}
