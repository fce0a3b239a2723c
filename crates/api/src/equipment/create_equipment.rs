use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::create_equipment::*;
use bauhub_domain::{Equipment, EquipmentStatus};
use bauhub_infra::Context;
use chrono::NaiveDate;

pub async fn create_equipment_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = CreateEquipmentUseCase {
        name: body.name,
        equipment_type: body.r#type,
        inventory_no: body.inventory_no.unwrap_or_default(),
        owned: body.owned.unwrap_or(true),
        status: body.status.unwrap_or_default(),
        rental_cost_per_day_eur: body.rental_cost_per_day_eur.unwrap_or(0.0),
        purchase_date: body.purchase_date,
        warranty_until: body.warranty_until,
        description: body.description.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|equipment| HttpResponse::Created().json(APIResponse::new(equipment)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct CreateEquipmentUseCase {
    pub name: String,
    pub equipment_type: String,
    pub inventory_no: String,
    pub owned: bool,
    pub status: EquipmentStatus,
    pub rental_cost_per_day_eur: f64,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub description: String,
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
                Self::BadClientData("Equipment name and type are required".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEquipmentUseCase {
    type Response = Equipment;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEquipment";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() || self.equipment_type.trim().is_empty() {
            return Err(UseCaseError::MissingFields);
        }

        let now = ctx.sys.get_timestamp_millis();
        let equipment = Equipment {
            id: Default::default(),
            name: self.name.clone(),
            r#type: self.equipment_type.clone(),
            inventory_no: self.inventory_no.clone(),
            owned: self.owned,
            status: self.status,
            rental_cost_per_day_eur: self.rental_cost_per_day_eur,
            purchase_date: self.purchase_date,
            warranty_until: self.warranty_until,
            description: self.description.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        ctx.repos
            .equipment
            .insert(&equipment)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(equipment)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn creates_equipment() {
        let ctx = Context::create_inmemory();
        let mut usecase = CreateEquipmentUseCase {
            name: "Excavator CAT 320".into(),
            equipment_type: "excavator".into(),
            inventory_no: "INV-042".into(),
            owned: true,
            status: Default::default(),
            rental_cost_per_day_eur: 450.0,
            purchase_date: None,
            warranty_until: None,
            description: String::new(),
        };

        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        let equipment = res.unwrap();
        assert!(ctx.repos.equipment.find(&equipment.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_empty_name() {
        let ctx = Context::create_inmemory();
        let mut usecase = CreateEquipmentUseCase {
            name: "  ".into(),
            equipment_type: "excavator".into(),
            inventory_no: String::new(),
            owned: true,
            status: Default::default(),
            rental_cost_per_day_eur: 0.0,
            purchase_date: None,
            warranty_until: None,
            description: String::new(),
        };

        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::MissingFields
        );
    }
}
