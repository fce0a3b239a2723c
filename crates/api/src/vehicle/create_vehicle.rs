use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::create_vehicle::*;
use bauhub_domain::{EquipmentStatus, Vehicle};
use bauhub_infra::Context;

pub async fn create_vehicle_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = CreateVehicleUseCase {
        license_plate: body.license_plate,
        make: body.make.unwrap_or_default(),
        model: body.model.unwrap_or_default(),
        vehicle_type: body.r#type.unwrap_or_default(),
        status: body.status.unwrap_or_default(),
        fuel_type: body.fuel_type.unwrap_or_default(),
        rental_cost_per_day_eur: body.rental_cost_per_day_eur.unwrap_or(0.0),
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Created().json(APIResponse::new(vehicle)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateVehicleUseCase {
    pub license_plate: String,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
    pub status: EquipmentStatus,
    pub fuel_type: String,
    pub rental_cost_per_day_eur: f64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFields,
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields => {
                Self::BadClientData("Vehicle license plate is required".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateVehicleUseCase {
    type Response = Vehicle;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateVehicle";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.license_plate.trim().is_empty() {
            return Err(UseCaseError::MissingFields);
        }

        let now = ctx.sys.get_timestamp_millis();
        let vehicle = Vehicle {
            id: Default::default(),
            license_plate: self.license_plate.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            r#type: self.vehicle_type.clone(),
            status: self.status,
            fuel_type: self.fuel_type.clone(),
            rental_cost_per_day_eur: self.rental_cost_per_day_eur,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        ctx.repos
            .vehicles
            .insert(&vehicle)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(vehicle)
    }
}
