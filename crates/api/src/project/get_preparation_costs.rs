use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::{
    AssignmentDTO, CostSection, FacilityDTO, HousingUnitDTO, MaterialAllocationDTO, WorkEntryDTO,
};
use bauhub_api_structs::get_preparation_costs::*;
use bauhub_domain::{EquipmentAssignment, ID};
use bauhub_infra::Context;

// Open assignments are billed a flat month until they get an end date.
const OPEN_ASSIGNMENT_BILLED_DAYS: f64 = 30.0;
const MILLIS_PER_DAY: f64 = (1000 * 60 * 60 * 24) as f64;

pub async fn get_preparation_costs_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let project_id = query_params
        .project_id
        .clone()
        .ok_or_else(|| AppError::BadClientData("Project ID is required".into()))?;

    let usecase = GetPreparationCostsUseCase { project_id };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GetPreparationCostsUseCase {
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

fn assignment_cost_eur(assignment: &EquipmentAssignment) -> f64 {
    let billed_days = match assignment.to_ts {
        Some(to_ts) => (((to_ts - assignment.from_ts) as f64) / MILLIS_PER_DAY).ceil().max(0.0),
        None => OPEN_ASSIGNMENT_BILLED_DAYS,
    };
    assignment.rental_cost_per_day_eur * billed_days
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPreparationCostsUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPreparationCosts";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let project = ctx
            .repos
            .projects
            .find(&self.project_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.project_id.clone()))?;

        let facilities = ctx
            .repos
            .facilities
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let housing = ctx
            .repos
            .housing_units
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let assignments = ctx
            .repos
            .equipment_assignments
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let allocations = ctx
            .repos
            .material_allocations
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let work_entries = ctx
            .repos
            .work_entries
            .find_by_project(&self.project_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let facility_total: f64 = facilities.iter().map(|f| f.total_rent_eur()).sum();
        let housing_total: f64 = housing.iter().map(|h| h.total_rent_eur()).sum();
        let equipment_total: f64 = assignments.iter().map(assignment_cost_eur).sum();
        let material_total: f64 = allocations.iter().map(|a| a.total_cost_eur()).sum();
        let labor_total: f64 = work_entries.iter().map(|w| w.labor_cost_eur).sum();
        let total = facility_total + housing_total + equipment_total + material_total + labor_total;

        let remaining_budget_eur = project.budget_eur - total;
        let budget_utilized_percentage = if project.budget_eur > 0.0 {
            total / project.budget_eur * 100.0
        } else {
            0.0
        };

        Ok(APIResponse {
            project: ProjectBudgetDTO {
                id: project.id,
                name: project.name,
                budget_eur: project.budget_eur,
                remaining_budget_eur,
                budget_utilized_percentage,
            },
            facilities: CostSection {
                items: facilities.into_iter().map(FacilityDTO::new).collect(),
                total: facility_total,
            },
            housing: CostSection {
                items: housing.into_iter().map(HousingUnitDTO::new).collect(),
                total: housing_total,
            },
            equipment: CostSection {
                items: assignments
                    .into_iter()
                    .map(AssignmentDTO::from_equipment)
                    .collect(),
                total: equipment_total,
            },
            materials: CostSection {
                items: allocations
                    .into_iter()
                    .map(MaterialAllocationDTO::new)
                    .collect(),
                total: material_total,
            },
            labor: CostSection {
                items: work_entries.into_iter().map(WorkEntryDTO::new).collect(),
                total: labor_total,
            },
            summary: SummaryDTO {
                facilities: facility_total,
                housing: housing_total,
                equipment: equipment_total,
                materials: material_total,
                labor: labor_total,
                total,
            },
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{Facility, MaterialAllocation, Project, WorkEntry};
    use chrono::NaiveDate;

    #[actix_web::main]
    #[test]
    async fn aggregates_costs_against_the_budget() {
        let ctx = Context::create_inmemory();
        let project = Project {
            id: Default::default(),
            name: "Substation".into(),
            city: "Erfurt".into(),
            status: Default::default(),
            start_date: None,
            end_date_plan: None,
            pm_user_id: None,
            budget_eur: 10_000.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();
        ctx.repos
            .facilities
            .insert(&Facility {
                id: Default::default(),
                project_id: project.id.clone(),
                name: "Site office".into(),
                rent_daily_eur: 50.0,
                start_date: Some(NaiveDate::from_ymd(2024, 4, 1)),
                end_date: Some(NaiveDate::from_ymd(2024, 4, 11)),
            })
            .await
            .unwrap();
        ctx.repos
            .material_allocations
            .insert(&MaterialAllocation {
                id: Default::default(),
                project_id: project.id.clone(),
                material_id: Default::default(),
                material_name: "Cable".into(),
                unit: "m".into(),
                price_per_unit_eur: 2.0,
                quantity: 500.0,
                allocated_at: 0,
            })
            .await
            .unwrap();
        ctx.repos
            .work_entries
            .insert(&WorkEntry {
                id: Default::default(),
                project_id: project.id.clone(),
                date: NaiveDate::from_ymd(2024, 4, 2),
                labor_cost_eur: 1_500.0,
            })
            .await
            .unwrap();

        let mut usecase = GetPreparationCostsUseCase {
            project_id: project.id.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        // 10 days of facility rent + 500m cable + labor
        assert_eq!(res.summary.facilities, 500.0);
        assert_eq!(res.summary.materials, 1_000.0);
        assert_eq!(res.summary.labor, 1_500.0);
        assert_eq!(res.summary.total, 3_000.0);
        assert_eq!(res.project.remaining_budget_eur, 7_000.0);
        assert_eq!(res.project.budget_utilized_percentage, 30.0);
    }
}
