use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::list_equipment::*;
use bauhub_api_structs::{dtos::EquipmentDTO, PaginationParams};
use bauhub_domain::Equipment;
use bauhub_infra::{Context, EquipmentFilters, PageQuery};

pub async fn list_equipment_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let pagination = PaginationParams::parse(query_params.page, query_params.per_page);
    let usecase = ListEquipmentUseCase {
        equipment_type: query_params.r#type.clone(),
        status: query_params.status.clone(),
        owned: query_params.owned,
        search: query_params.search.clone(),
        pagination,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                items: res.items.into_iter().map(EquipmentDTO::new).collect(),
                total: res.total,
                page: pagination.page,
                per_page: pagination.per_page,
                total_pages: pagination.total_pages(res.total),
            })
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct ListEquipmentUseCase {
    pub equipment_type: Option<String>,
    pub status: Option<String>,
    pub owned: Option<bool>,
    pub search: Option<String>,
    pub pagination: PaginationParams,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub items: Vec<Equipment>,
    pub total: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidStatus(String),
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidStatus(status) => {
                Self::BadClientData(format!("Invalid equipment status filter: {}", status))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListEquipmentUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "ListEquipment";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut filters = EquipmentFilters {
            equipment_type: self.equipment_type.clone(),
            owned: self.owned,
            search: self.search.clone(),
            ..Default::default()
        };

        match self.status.as_deref() {
            // "available" also means no active assignment, whatever the
            // unit's own status claims
            Some("available") => {
                filters.exclude_ids = ctx
                    .repos
                    .equipment_assignments
                    .find_active_equipment_ids()
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
            }
            Some(status) => {
                filters.status = Some(
                    status
                        .parse()
                        .map_err(|_| UseCaseError::InvalidStatus(status.to_string()))?,
                );
            }
            None => {}
        }

        let page = PageQuery {
            offset: self.pagination.offset(),
            limit: self.pagination.per_page,
        };
        let (items, total) = ctx
            .repos
            .equipment
            .list(&filters, page)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseResponse { items, total })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{EquipmentAssignment, EquipmentStatus, ID};

    fn generate_equipment(name: &str, status: EquipmentStatus) -> Equipment {
        Equipment {
            id: Default::default(),
            name: name.into(),
            r#type: "excavator".into(),
            inventory_no: "INV-1".into(),
            owned: true,
            status,
            rental_cost_per_day_eur: 100.0,
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
    async fn available_filter_excludes_assigned_units() {
        let ctx = Context::create_inmemory();
        let assigned = generate_equipment("assigned", EquipmentStatus::InUse);
        let free = generate_equipment("free", EquipmentStatus::InUse);
        ctx.repos.equipment.insert(&assigned).await.unwrap();
        ctx.repos.equipment.insert(&free).await.unwrap();
        ctx.repos
            .equipment_assignments
            .try_insert(&EquipmentAssignment {
                id: Default::default(),
                equipment_id: assigned.id.clone(),
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

        let mut usecase = ListEquipmentUseCase {
            equipment_type: None,
            status: Some("available".into()),
            owned: None,
            search: None,
            pagination: PaginationParams::parse(None, None),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.total, 1);
        assert_eq!(res.items[0].name, "free");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_status_filter() {
        let ctx = Context::create_inmemory();
        let mut usecase = ListEquipmentUseCase {
            equipment_type: None,
            status: Some("melted".into()),
            owned: None,
            search: None,
            pagination: PaginationParams::parse(None, None),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
