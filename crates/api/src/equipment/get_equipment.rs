use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::get_equipment::*;
use bauhub_domain::{Equipment, EquipmentAssignment, ID};
use bauhub_infra::{AssignmentFilters, Context, PageQuery};

pub async fn get_equipment_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetEquipmentUseCase {
        equipment_id: path_params.equipment_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(
                res.equipment,
                res.current_assignment,
                res.assignments_count,
            ))
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GetEquipmentUseCase {
    pub equipment_id: ID,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub equipment: Equipment,
    pub current_assignment: Option<EquipmentAssignment>,
    pub assignments_count: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(equipment_id) => Self::NotFound(format!(
                "The equipment with id: {}, was not found.",
                equipment_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEquipmentUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEquipment";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let equipment = ctx
            .repos
            .equipment
            .find(&self.equipment_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.equipment_id.clone()))?;

        let current_assignment = ctx
            .repos
            .equipment_assignments
            .find_active_by_equipment(&self.equipment_id)
            .await;

        let filters = AssignmentFilters {
            resource_id: Some(self.equipment_id.clone()),
            ..Default::default()
        };
        let (_, assignments_count) = ctx
            .repos
            .equipment_assignments
            .list(
                &filters,
                PageQuery {
                    offset: 0,
                    limit: 1,
                },
            )
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseResponse {
            equipment,
            current_assignment,
            assignments_count: assignments_count as usize,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn soft_deleted_equipment_is_not_found() {
        let ctx = Context::create_inmemory();
        let equipment = Equipment {
            id: Default::default(),
            name: "Crane".into(),
            r#type: "crane".into(),
            inventory_no: String::new(),
            owned: true,
            status: Default::default(),
            rental_cost_per_day_eur: 0.0,
            purchase_date: None,
            warranty_until: None,
            description: String::new(),
            is_active: true,
            created_at: 0,
            updated_at: 0,
        };
        ctx.repos.equipment.insert(&equipment).await.unwrap();

        let mut usecase = GetEquipmentUseCase {
            equipment_id: equipment.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        ctx.repos.equipment.soft_delete(&equipment.id, 1).await;

        let mut usecase = GetEquipmentUseCase {
            equipment_id: equipment.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(equipment.id)
        );
    }
}
