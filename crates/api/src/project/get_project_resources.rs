use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::{AssignmentDTO, EquipmentDTO, MaterialAllocationDTO, VehicleDTO};
use bauhub_api_structs::get_project_resources::*;
use bauhub_domain::ID;
use bauhub_infra::Context;

pub async fn get_project_resources_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetProjectResourcesUseCase {
        project_id: path_params.project_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GetProjectResourcesUseCase {
    pub project_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(project_id) => Self::NotFound(format!(
                "The project with id: {}, was not found.",
                project_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProjectResourcesUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProjectResources";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx.repos.projects.find(&self.project_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.project_id.clone()));
        }

        let equipment_assignments = ctx
            .repos
            .equipment_assignments
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let vehicle_assignments = ctx
            .repos
            .vehicle_assignments
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let allocations = ctx
            .repos
            .material_allocations
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut equipment = Vec::with_capacity(equipment_assignments.len());
        for assignment in equipment_assignments {
            let unit = ctx.repos.equipment.find(&assignment.equipment_id).await;
            equipment.push(EquipmentResourceDTO {
                assignment: AssignmentDTO::from_equipment(assignment),
                equipment: unit.map(EquipmentDTO::new),
            });
        }

        let mut vehicles = Vec::with_capacity(vehicle_assignments.len());
        for assignment in vehicle_assignments {
            let vehicle = ctx.repos.vehicles.find(&assignment.vehicle_id).await;
            vehicles.push(VehicleResourceDTO {
                assignment: AssignmentDTO::from_vehicle(assignment),
                vehicle: vehicle.map(VehicleDTO::new),
            });
        }

        Ok(APIResponse {
            equipment,
            vehicles,
            materials: allocations
                .into_iter()
                .map(MaterialAllocationDTO::new)
                .collect(),
        })
    }
}
