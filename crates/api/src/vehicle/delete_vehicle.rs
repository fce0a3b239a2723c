use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::delete_vehicle::*;
use bauhub_domain::{Vehicle, ID};
use bauhub_infra::Context;

pub async fn delete_vehicle_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = DeleteVehicleUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct DeleteVehicleUseCase {
    pub vehicle_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    HasActiveAssignment,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::HasActiveAssignment => Self::Conflict(
                "Cannot delete vehicle with active assignments. Please end all assignments first."
                    .into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteVehicleUseCase {
    type Response = Vehicle;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteVehicle";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .vehicle_assignments
            .find_active_by_vehicle(&self.vehicle_id)
            .await
            .is_some()
        {
            return Err(UseCaseError::HasActiveAssignment);
        }

        ctx.repos
            .vehicles
            .soft_delete(&self.vehicle_id, ctx.sys.get_timestamp_millis())
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.vehicle_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::VehicleAssignment;

    #[actix_web::main]
    #[test]
    async fn refuses_to_delete_assigned_vehicle() {
        let ctx = Context::create_inmemory();
        let vehicle = Vehicle {
            id: Default::default(),
            license_plate: "B-AU 1234".into(),
            make: "MAN".into(),
            model: "TGS".into(),
            r#type: "truck".into(),
            status: Default::default(),
            fuel_type: "diesel".into(),
            rental_cost_per_day_eur: 0.0,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        };
        ctx.repos.vehicles.insert(&vehicle).await.unwrap();
        ctx.repos
            .vehicle_assignments
            .try_insert(&VehicleAssignment {
                id: Default::default(),
                vehicle_id: vehicle.id.clone(),
                project_id: ID::default(),
                crew_id: None,
                from_ts: 0,
                to_ts: None,
                is_permanent: false,
                rental_cost_per_day_eur: 0.0,
                notes: String::new(),
                created_at: 0,
            })
            .await
            .unwrap();

        let mut usecase = DeleteVehicleUseCase {
            vehicle_id: vehicle.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::HasActiveAssignment
        );
    }
}
