use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::equipment_analytics::*;
use bauhub_domain::ID;
use bauhub_infra::{AssignmentFilters, Context, PageQuery};
use chrono::NaiveDate;
use std::collections::HashMap;

pub async fn equipment_analytics_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = EquipmentAnalyticsUseCase {
        project_id: query_params.project_id.clone(),
        start_date: query_params.start_date,
        end_date: query_params.end_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct EquipmentAnalyticsUseCase {
    pub project_id: Option<ID>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for EquipmentAnalyticsUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "EquipmentAnalytics";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let equipment = ctx
            .repos
            .equipment
            .find_all_active()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let filters = AssignmentFilters {
            project_id: self.project_id.clone(),
            ..Default::default()
        };
        let (assignments, assignments_total) = ctx
            .repos
            .equipment_assignments
            .list(
                &filters,
                PageQuery {
                    offset: 0,
                    limit: i64::MAX,
                },
            )
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let start_millis = self.start_date.map(|d| d.and_hms(0, 0, 0).timestamp_millis());
        let end_millis = self.end_date.map(|d| d.and_hms(23, 59, 59).timestamp_millis());
        let assignments: Vec<_> = assignments
            .into_iter()
            .filter(|a| {
                start_millis.map_or(true, |start| a.from_ts >= start)
                    && end_millis.map_or(true, |end| a.from_ts <= end)
            })
            .collect();

        let mut status_distribution: HashMap<String, usize> = HashMap::new();
        let mut type_distribution: HashMap<String, usize> = HashMap::new();
        let mut rental_cost_per_day_total_eur = 0.0;
        for unit in &equipment {
            *status_distribution
                .entry(unit.status.as_str().to_string())
                .or_insert(0) += 1;
            *type_distribution.entry(unit.r#type.clone()).or_insert(0) += 1;
            rental_cost_per_day_total_eur += unit.rental_cost_per_day_eur;
        }

        let assigned_units: std::collections::HashSet<_> = assignments
            .iter()
            .filter(|a| a.is_active())
            .map(|a| a.equipment_id.clone())
            .collect();
        let utilization_rate = if equipment.is_empty() {
            0.0
        } else {
            assigned_units.len() as f64 / equipment.len() as f64
        };

        Ok(APIResponse {
            total_units: equipment.len(),
            utilization_rate,
            status_distribution,
            type_distribution,
            assignments_total: assignments_total as usize,
            assignments_active: assigned_units.len(),
            rental_cost_per_day_total_eur,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{Equipment, EquipmentAssignment, EquipmentStatus};

    #[actix_web::main]
    #[test]
    async fn computes_utilization_over_active_assignments() {
        let ctx = Context::create_inmemory();
        let mut unit_ids = Vec::new();
        for i in 0..4 {
            let unit = Equipment {
                id: Default::default(),
                name: format!("Unit {}", i),
                r#type: "excavator".into(),
                inventory_no: String::new(),
                owned: true,
                status: EquipmentStatus::Available,
                rental_cost_per_day_eur: 100.0,
                purchase_date: None,
                warranty_until: None,
                description: String::new(),
                is_active: true,
                created_at: 0,
                updated_at: 0,
            };
            ctx.repos.equipment.insert(&unit).await.unwrap();
            unit_ids.push(unit.id);
        }
        ctx.repos
            .equipment_assignments
            .try_insert(&EquipmentAssignment {
                id: Default::default(),
                equipment_id: unit_ids[0].clone(),
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

        let mut usecase = EquipmentAnalyticsUseCase {
            project_id: None,
            start_date: None,
            end_date: None,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.total_units, 4);
        assert_eq!(res.assignments_active, 1);
        assert!((res.utilization_rate - 0.25).abs() < f64::EPSILON);
        assert_eq!(res.rental_cost_per_day_total_eur, 400.0);
        assert_eq!(res.status_distribution.get("available"), Some(&4));
    }
}
