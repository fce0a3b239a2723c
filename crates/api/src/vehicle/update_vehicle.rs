use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::update_vehicle::*;
use bauhub_domain::{EquipmentStatus, Vehicle, ID};
use bauhub_infra::Context;

pub async fn update_vehicle_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = UpdateVehicleUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
        license_plate: body.license_plate,
        make: body.make,
        model: body.model,
        vehicle_type: body.r#type,
        status: body.status,
        fuel_type: body.fuel_type,
        rental_cost_per_day_eur: body.rental_cost_per_day_eur,
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct UpdateVehicleUseCase {
    pub vehicle_id: ID,
    pub license_plate: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub fuel_type: Option<String>,
    pub rental_cost_per_day_eur: Option<f64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateVehicleUseCase {
    type Response = Vehicle;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateVehicle";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut vehicle = ctx
            .repos
            .vehicles
            .find(&self.vehicle_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.vehicle_id.clone()))?;

        if let Some(license_plate) = &self.license_plate {
            vehicle.license_plate = license_plate.clone();
        }
        if let Some(make) = &self.make {
            vehicle.make = make.clone();
        }
        if let Some(model) = &self.model {
            vehicle.model = model.clone();
        }
        if let Some(vehicle_type) = &self.vehicle_type {
            vehicle.r#type = vehicle_type.clone();
        }
        if let Some(status) = self.status {
            vehicle.status = status;
        }
        if let Some(fuel_type) = &self.fuel_type {
            vehicle.fuel_type = fuel_type.clone();
        }
        if let Some(rental_cost) = self.rental_cost_per_day_eur {
            vehicle.rental_cost_per_day_eur = rental_cost;
        }
        vehicle.updated_at = ctx.sys.get_timestamp_millis();

        ctx.repos
            .vehicles
            .save(&vehicle)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(vehicle)
    }
}
