use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::update_equipment::*;
use bauhub_domain::{Equipment, EquipmentStatus, ID};
use bauhub_infra::Context;
use chrono::NaiveDate;

pub async fn update_equipment_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let body = body.0;
    let usecase = UpdateEquipmentUseCase {
        equipment_id: path_params.equipment_id.clone(),
        name: body.name,
        equipment_type: body.r#type,
        inventory_no: body.inventory_no,
        owned: body.owned,
        status: body.status,
        rental_cost_per_day_eur: body.rental_cost_per_day_eur,
        purchase_date: body.purchase_date,
        warranty_until: body.warranty_until,
        description: body.description,
    };

    execute(usecase, &ctx)
        .await
        .map(|equipment| HttpResponse::Ok().json(APIResponse::new(equipment)))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct UpdateEquipmentUseCase {
    pub equipment_id: ID,
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub inventory_no: Option<String>,
    pub owned: Option<bool>,
    pub status: Option<EquipmentStatus>,
    pub rental_cost_per_day_eur: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub description: Option<String>,
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
impl UseCase for UpdateEquipmentUseCase {
    type Response = Equipment;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEquipment";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut equipment = ctx
            .repos
            .equipment
            .find(&self.equipment_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.equipment_id.clone()))?;

        if let Some(name) = &self.name {
            equipment.name = name.clone();
        }
        if let Some(equipment_type) = &self.equipment_type {
            equipment.r#type = equipment_type.clone();
        }
        if let Some(inventory_no) = &self.inventory_no {
            equipment.inventory_no = inventory_no.clone();
        }
        if let Some(owned) = self.owned {
            equipment.owned = owned;
        }
        if let Some(status) = self.status {
            equipment.status = status;
        }
        if let Some(rental_cost) = self.rental_cost_per_day_eur {
            equipment.rental_cost_per_day_eur = rental_cost;
        }
        if let Some(purchase_date) = self.purchase_date {
            equipment.purchase_date = Some(purchase_date);
        }
        if let Some(warranty_until) = self.warranty_until {
            equipment.warranty_until = Some(warranty_until);
        }
        if let Some(description) = &self.description {
            equipment.description = description.clone();
        }
        equipment.updated_at = ctx.sys.get_timestamp_millis();

        ctx.repos
            .equipment
            .save(&equipment)
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
    async fn updates_only_provided_fields() {
        let ctx = Context::create_inmemory();
        let equipment = Equipment {
            id: Default::default(),
            name: "Mixer".into(),
            r#type: "mixer".into(),
            inventory_no: "INV-7".into(),
            owned: true,
            status: Default::default(),
            rental_cost_per_day_eur: 80.0,
            purchase_date: None,
            warranty_until: None,
            description: String::new(),
            is_active: true,
            created_at: 0,
            updated_at: 0,
        };
        ctx.repos.equipment.insert(&equipment).await.unwrap();

        let mut usecase = UpdateEquipmentUseCase {
            equipment_id: equipment.id.clone(),
            name: Some("Mixer XL".into()),
            equipment_type: None,
            inventory_no: None,
            owned: None,
            status: None,
            rental_cost_per_day_eur: Some(95.0),
            purchase_date: None,
            warranty_until: None,
            description: None,
        };

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.name, "Mixer XL");
        assert_eq!(updated.rental_cost_per_day_eur, 95.0);
        assert_eq!(updated.inventory_no, "INV-7");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_equipment() {
        let ctx = Context::create_inmemory();
        let mut usecase = UpdateEquipmentUseCase {
            equipment_id: ID::default(),
            name: None,
            equipment_type: None,
            inventory_no: None,
            owned: None,
            status: None,
            rental_cost_per_day_eur: None,
            purchase_date: None,
            warranty_until: None,
            description: None,
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
