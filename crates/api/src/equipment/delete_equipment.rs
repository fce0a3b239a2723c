use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::delete_equipment::*;
use bauhub_domain::{Equipment, ID};
use bauhub_infra::Context;

pub async fn delete_equipment_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = DeleteEquipmentUseCase {
        equipment_id: path_params.equipment_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|equipment| HttpResponse::Ok().json(APIResponse::new(equipment)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct DeleteEquipmentUseCase {
    pub equipment_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    HasActiveAssignment,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(equipment_id) => Self::NotFound(format!(
                "The equipment with id: {}, was not found.",
                equipment_id
            )),
            UseCaseError::HasActiveAssignment => Self::Conflict(
                "Cannot delete equipment with active assignments. Please end all assignments first."
                    .into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEquipmentUseCase {
    type Response = Equipment;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEquipment";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .equipment_assignments
            .find_active_by_equipment(&self.equipment_id)
            .await
            .is_some()
        {
            return Err(UseCaseError::HasActiveAssignment);
        }

        ctx.repos
            .equipment
            .soft_delete(&self.equipment_id, ctx.sys.get_timestamp_millis())
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.equipment_id.clone()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::EquipmentAssignment;

    fn generate_equipment() -> Equipment {
        Equipment {
            id: Default::default(),
            name: "Generator".into(),
            r#type: "generator".into(),
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
        }
    }

    #[actix_web::main]
    #[test]
    async fn refuses_to_delete_assigned_equipment() {
        let ctx = Context::create_inmemory();
        let equipment = generate_equipment();
        ctx.repos.equipment.insert(&equipment).await.unwrap();
        ctx.repos
            .equipment_assignments
            .try_insert(&EquipmentAssignment {
                id: Default::default(),
                equipment_id: equipment.id.clone(),
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

        let mut usecase = DeleteEquipmentUseCase {
            equipment_id: equipment.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::HasActiveAssignment
        );
        // still visible, nothing was soft deleted
        assert!(ctx.repos.equipment.find(&equipment.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn soft_deletes_unassigned_equipment() {
        let ctx = Context::create_inmemory();
        let equipment = generate_equipment();
        ctx.repos.equipment.insert(&equipment).await.unwrap();

        let mut usecase = DeleteEquipmentUseCase {
            equipment_id: equipment.id.clone(),
        };
        let deleted = usecase.execute(&ctx).await.unwrap();
        assert!(!deleted.is_active);
        assert!(ctx.repos.equipment.find(&equipment.id).await.is_none());
    }
}
