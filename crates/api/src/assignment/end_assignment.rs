use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::AssignmentDTO;
use bauhub_api_structs::end_assignment::*;
use bauhub_domain::{ResourceKind, ID};
use bauhub_infra::Context;

pub async fn end_assignment_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = EndAssignmentUseCase {
        kind: path_params.kind,
        assignment_id: path_params.assignment_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|assignment| HttpResponse::Ok().json(APIResponse { assignment }))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct EndAssignmentUseCase {
    pub kind: ResourceKind,
    pub assignment_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    MaterialHasNoAssignments,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(assignment_id) => Self::NotFound(format!(
                "The active assignment with id: {}, was not found.",
                assignment_id
            )),
            UseCaseError::MaterialHasNoAssignments => Self::BadClientData(
                "Material resources are allocated, not assigned.".into(),
            ),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for EndAssignmentUseCase {
    type Response = AssignmentDTO;

    type Error = UseCaseError;

    const NAME: &'static str = "EndAssignment";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        match self.kind {
            ResourceKind::Equipment => ctx
                .repos
                .equipment_assignments
                .end(&self.assignment_id, now)
                .await
                .map(AssignmentDTO::from_equipment)
                .ok_or_else(|| UseCaseError::NotFound(self.assignment_id.clone())),
            ResourceKind::Vehicle => ctx
                .repos
                .vehicle_assignments
                .end(&self.assignment_id, now)
                .await
                .map(AssignmentDTO::from_vehicle)
                .ok_or_else(|| UseCaseError::NotFound(self.assignment_id.clone())),
            ResourceKind::Material => Err(UseCaseError::MaterialHasNoAssignments),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::EquipmentAssignment;

    #[actix_web::main]
    #[test]
    async fn frees_the_unit_for_new_assignments() {
        let ctx = Context::create_inmemory();
        let equipment_id = ID::default();
        let assignment = EquipmentAssignment {
            id: Default::default(),
            equipment_id: equipment_id.clone(),
            project_id: ID::default(),
            crew_id: None,
            from_ts: 0,
            to_ts: None,
            is_permanent: false,
            rental_cost_per_day_eur: 0.0,
            notes: String::new(),
            created_at: 0,
        };
        assert!(ctx
            .repos
            .equipment_assignments
            .try_insert(&assignment)
            .await
            .unwrap());

        let mut usecase = EndAssignmentUseCase {
            kind: ResourceKind::Equipment,
            assignment_id: assignment.id.clone(),
        };
        let ended = usecase.execute(&ctx).await.unwrap();
        assert!(ended.to_ts.is_some());

        // the slot is free again
        let next = EquipmentAssignment {
            id: Default::default(),
            equipment_id,
            ..assignment
        };
        assert!(ctx
            .repos
            .equipment_assignments
            .try_insert(&next)
            .await
            .unwrap());
    }

    #[actix_web::main]
    #[test]
    async fn ending_twice_is_not_found() {
        let ctx = Context::create_inmemory();
        let assignment = EquipmentAssignment {
            id: Default::default(),
            equipment_id: ID::default(),
            project_id: ID::default(),
            crew_id: None,
            from_ts: 0,
            to_ts: None,
            is_permanent: false,
            rental_cost_per_day_eur: 0.0,
            notes: String::new(),
            created_at: 0,
        };
        ctx.repos
            .equipment_assignments
            .try_insert(&assignment)
            .await
            .unwrap();

        let mut usecase = EndAssignmentUseCase {
            kind: ResourceKind::Equipment,
            assignment_id: assignment.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        let mut usecase = EndAssignmentUseCase {
            kind: ResourceKind::Equipment,
            assignment_id: assignment.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(assignment.id)
        );
    }
}
