use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::list_vehicles::*;
use bauhub_api_structs::{dtos::VehicleDTO, PaginationParams};
use bauhub_domain::Vehicle;
use bauhub_infra::{Context, PageQuery, VehicleFilters};

pub async fn list_vehicles_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let pagination = PaginationParams::parse(query_params.page, query_params.per_page);
    let usecase = ListVehiclesUseCase {
        vehicle_type: query_params.r#type.clone(),
        status: query_params.status.clone(),
        search: query_params.search.clone(),
        pagination,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                items: res.items.into_iter().map(VehicleDTO::new).collect(),
                total: res.total,
                page: pagination.page,
                per_page: pagination.per_page,
                total_pages: pagination.total_pages(res.total),
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct ListVehiclesUseCase {
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub pagination: PaginationParams,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub items: Vec<Vehicle>,
    pub total: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidStatus(String),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidStatus(status) => {
                Self::BadClientData(format!("Invalid vehicle status filter: {}", status))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListVehiclesUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "ListVehicles";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let status = match self.status.as_deref() {
            Some(status) => Some(
                status
                    .parse()
                    .map_err(|_| UseCaseError::InvalidStatus(status.to_string()))?,
            ),
            None => None,
        };
        let filters = VehicleFilters {
            vehicle_type: self.vehicle_type.clone(),
            status,
            search: self.search.clone(),
        };

        let page = PageQuery {
            offset: self.pagination.offset(),
            limit: self.pagination.per_page,
        };
        let (items, total) = ctx
            .repos
            .vehicles
            .list(&filters, page)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseResponse { items, total })
    }
}
