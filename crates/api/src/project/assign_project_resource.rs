use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::assign_project_resource::*;
use bauhub_domain::{EquipmentAssignment, MaterialAllocation, ResourceKind, VehicleAssignment, ID};
use bauhub_infra::Context;

pub async fn assign_project_resource_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = AssignProjectResourceUseCase {
        project_id: path_params.project_id.clone(),
        kind: body.kind,
        resource_id: body.resource_id,
        crew_id: body.crew_id,
        from_ts: body.from_ts,
        is_permanent: body.is_permanent.unwrap_or(false),
        rental_cost_per_day_eur: body.rental_cost_per_day_eur.unwrap_or(0.0),
        notes: body.notes.unwrap_or_default(),
        quantity: body.quantity,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Created().json(APIResponse {
                assignment_id: res.assignment_id,
                message: res.message,
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct AssignProjectResourceUseCase {
    pub project_id: ID,
    pub kind: ResourceKind,
    pub resource_id: ID,
    pub crew_id: Option<ID>,
    pub from_ts: Option<i64>,
    pub is_permanent: bool,
    pub rental_cost_per_day_eur: f64,
    pub notes: String,
    pub quantity: Option<f64>,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub assignment_id: ID,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ProjectNotFound(ID),
    ResourceNotFound(ID),
    CrewNotInProject(ID),
    AlreadyAssigned { crew_name: Option<String> },
    MissingQuantity,
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProjectNotFound(project_id) => Self::NotFound(format!(
                "The project with id: {}, was not found.",
                project_id
            )),
            UseCaseError::ResourceNotFound(resource_id) => Self::NotFound(format!(
                "The resource with id: {}, was not found.",
                resource_id
            )),
            UseCaseError::CrewNotInProject(crew_id) => Self::BadClientData(format!(
                "Crew with id: {}, was not found or is not assigned to this project.",
                crew_id
            )),
            UseCaseError::AlreadyAssigned { crew_name } => Self::Conflict(match crew_name {
                Some(name) => format!(
                    "Resource is already assigned to crew \"{}\". End the existing assignment first.",
                    name
                ),
                None => {
                    "Resource already has an active assignment. End the existing assignment first."
                        .into()
                }
            }),
            UseCaseError::MissingQuantity => {
                Self::BadClientData("Material allocations require a quantity".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AssignProjectResourceUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "AssignProjectResource";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if ctx.repos.projects.find(&self.project_id).await.is_none() {
            return Err(UseCaseError::ProjectNotFound(self.project_id.clone()));
        }
        if let Some(crew_id) = &self.crew_id {
            if ctx
                .repos
                .crews
                .find_in_project(crew_id, &self.project_id)
                .await
                .is_none()
            {
                return Err(UseCaseError::CrewNotInProject(crew_id.clone()));
            }
        }

        let now = ctx.sys.get_timestamp_millis();
        let from_ts = self.from_ts.unwrap_or(now);

        match self.kind {
            ResourceKind::Equipment => {
                if ctx.repos.equipment.find(&self.resource_id).await.is_none() {
                    return Err(UseCaseError::ResourceNotFound(self.resource_id.clone()));
                }
                let assignment = EquipmentAssignment {
                    id: Default::default(),
                    equipment_id: self.resource_id.clone(),
                    project_id: self.project_id.clone(),
                    crew_id: self.crew_id.clone(),
                    from_ts,
                    to_ts: None,
                    is_permanent: self.is_permanent,
                    rental_cost_per_day_eur: self.rental_cost_per_day_eur,
                    notes: self.notes.clone(),
                    created_at: now,
                };
                let inserted = ctx
                    .repos
                    .equipment_assignments
                    .try_insert(&assignment)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                if !inserted {
                    let crew_name =
                        conflicting_equipment_crew_name(ctx, &self.resource_id).await;
                    return Err(UseCaseError::AlreadyAssigned { crew_name });
                }
                Ok(UseCaseResponse {
                    assignment_id: assignment.id,
                    message: match self.crew_id {
                        Some(_) => "Equipment assigned to crew successfully".into(),
                        None => "Equipment assigned to project successfully".into(),
                    },
                })
            }
            ResourceKind::Vehicle => {
                if ctx.repos.vehicles.find(&self.resource_id).await.is_none() {
                    return Err(UseCaseError::ResourceNotFound(self.resource_id.clone()));
                }
                let assignment = VehicleAssignment {
                    id: Default::default(),
                    vehicle_id: self.resource_id.clone(),
                    project_id: self.project_id.clone(),
                    crew_id: self.crew_id.clone(),
                    from_ts,
                    to_ts: None,
                    is_permanent: self.is_permanent,
                    rental_cost_per_day_eur: self.rental_cost_per_day_eur,
                    notes: self.notes.clone(),
                    created_at: now,
                };
                let inserted = ctx
                    .repos
                    .vehicle_assignments
                    .try_insert(&assignment)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                if !inserted {
                    let crew_name = conflicting_vehicle_crew_name(ctx, &self.resource_id).await;
                    return Err(UseCaseError::AlreadyAssigned { crew_name });
                }
                Ok(UseCaseResponse {
                    assignment_id: assignment.id,
                    message: match self.crew_id {
                        Some(_) => "Vehicle assigned to crew successfully".into(),
                        None => "Vehicle assigned to project successfully".into(),
                    },
                })
            }
            ResourceKind::Material => {
                let quantity = self.quantity.ok_or(UseCaseError::MissingQuantity)?;
                let allocation = MaterialAllocation {
                    id: Default::default(),
                    project_id: self.project_id.clone(),
                    material_id: self.resource_id.clone(),
                    material_name: String::new(),
                    unit: String::new(),
                    price_per_unit_eur: 0.0,
                    quantity,
                    allocated_at: now,
                };
                ctx.repos
                    .material_allocations
                    .insert(&allocation)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(UseCaseResponse {
                    assignment_id: allocation.id,
                    message: "Material allocated to project successfully".into(),
                })
            }
        }
    }
}

async fn conflicting_equipment_crew_name(ctx: &Context, equipment_id: &ID) -> Option<String> {
    let assignment = ctx
        .repos
        .equipment_assignments
        .find_active_by_equipment(equipment_id)
        .await?;
    let crew_id = assignment.crew_id?;
    ctx.repos.crews.find(&crew_id).await.map(|c| c.name)
}

async fn conflicting_vehicle_crew_name(ctx: &Context, vehicle_id: &ID) -> Option<String> {
    let assignment = ctx
        .repos
        .vehicle_assignments
        .find_active_by_vehicle(vehicle_id)
        .await?;
    let crew_id = assignment.crew_id?;
    ctx.repos.crews.find(&crew_id).await.map(|c| c.name)
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{Crew, Equipment, Project};

    struct TestContext {
        ctx: Context,
        project: Project,
        crew: Crew,
        equipment: Equipment,
    }

    async fn setup() -> TestContext {
        let ctx = Context::create_inmemory();
        let project = Project {
            id: Default::default(),
            name: "Depot extension".into(),
            city: "Dresden".into(),
            status: Default::default(),
            start_date: None,
            end_date_plan: None,
            pm_user_id: None,
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();
        let crew = Crew {
            id: Default::default(),
            name: "Crew Nord".into(),
            project_id: project.id.clone(),
        };
        ctx.repos.crews.insert(&crew).await.unwrap();
        let equipment = Equipment {
            id: Default::default(),
            name: "Excavator".into(),
            r#type: "excavator".into(),
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

        TestContext {
            ctx,
            project,
            crew,
            equipment,
        }
    }

    fn generate_usecase(test_ctx: &TestContext) -> AssignProjectResourceUseCase {
        AssignProjectResourceUseCase {
            project_id: test_ctx.project.id.clone(),
            kind: ResourceKind::Equipment,
            resource_id: test_ctx.equipment.id.clone(),
            crew_id: Some(test_ctx.crew.id.clone()),
            from_ts: Some(0),
            is_permanent: false,
            rental_cost_per_day_eur: 0.0,
            notes: String::new(),
            quantity: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn assigns_equipment_once() {
        let test_ctx = setup().await;
        let mut usecase = generate_usecase(&test_ctx);
        assert!(usecase.execute(&test_ctx.ctx).await.is_ok());
    }

    #[actix_web::main]
    #[test]
    async fn second_assignment_names_the_conflicting_crew() {
        let test_ctx = setup().await;
        let mut usecase = generate_usecase(&test_ctx);
        usecase.execute(&test_ctx.ctx).await.unwrap();

        let mut second = generate_usecase(&test_ctx);
        assert_eq!(
            second.execute(&test_ctx.ctx).await.unwrap_err(),
            UseCaseError::AlreadyAssigned {
                crew_name: Some("Crew Nord".into())
            }
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_crew_of_another_project() {
        let test_ctx = setup().await;
        let other_project = Project {
            id: Default::default(),
            name: "Other".into(),
            city: String::new(),
            status: Default::default(),
            start_date: None,
            end_date_plan: None,
            pm_user_id: None,
            budget_eur: 0.0,
        };
        test_ctx.ctx.repos.projects.insert(&other_project).await.unwrap();

        let mut usecase = generate_usecase(&test_ctx);
        usecase.project_id = other_project.id;
        assert_eq!(
            usecase.execute(&test_ctx.ctx).await.unwrap_err(),
            UseCaseError::CrewNotInProject(test_ctx.crew.id.clone())
        );
    }

    #[actix_web::main]
    #[test]
    async fn material_allocation_requires_quantity() {
        let test_ctx = setup().await;
        let mut usecase = generate_usecase(&test_ctx);
        usecase.kind = ResourceKind::Material;
        usecase.crew_id = None;
        assert_eq!(
            usecase.execute(&test_ctx.ctx).await.unwrap_err(),
            UseCaseError::MissingQuantity
        );
    }
}
