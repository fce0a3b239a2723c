use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::get_vehicle::*;
use bauhub_domain::{Vehicle, VehicleAssignment, ID};
use bauhub_infra::Context;

pub async fn get_vehicle_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetVehicleUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.vehicle, res.current_assignment)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GetVehicleUseCase {
    pub vehicle_id: ID,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub vehicle: Vehicle,
    pub current_assignment: Option<VehicleAssignment>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVehicleUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetVehicle";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let vehicle = ctx
            .repos
            .vehicles
            .find(&self.vehicle_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.vehicle_id.clone()))?;

        let current_assignment = ctx
            .repos
            .vehicle_assignments
            .find_active_by_vehicle(&self.vehicle_id)
            .await;

        Ok(UseCaseResponse {
            vehicle,
            current_assignment,
        })
    }
}
