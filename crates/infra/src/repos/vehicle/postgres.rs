use super::IVehicleRepo;
use crate::repos::shared::query_structs::{PageQuery, VehicleFilters};
use bauhub_domain::{Vehicle, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresVehicleRepo {
    pool: PgPool,
}

impl PostgresVehicleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VehicleRaw {
    vehicle_uid: Uuid,
    license_plate: String,
    make: String,
    model: String,
    vehicle_type: String,
    status: String,
    fuel_type: String,
    rental_cost_per_day_eur: f64,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl Into<Vehicle> for VehicleRaw {
    fn into(self) -> Vehicle {
        Vehicle {
            id: self.vehicle_uid.into(),
            license_plate: self.license_plate,
            make: self.make,
            model: self.model,
            r#type: self.vehicle_type,
            status: self.status.parse().unwrap_or_default(),
            fuel_type: self.fuel_type,
            rental_cost_per_day_eur: self.rental_cost_per_day_eur,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const LIST_FILTER: &str = r#"
    v.is_active = TRUE
    AND ($1::text IS NULL OR v.vehicle_type = $1)
    AND ($2::text IS NULL OR v.status = $2)
    AND ($3::text IS NULL OR v.license_plate ILIKE '%' || $3 || '%'
         OR v.make ILIKE '%' || $3 || '%'
         OR v.model ILIKE '%' || $3 || '%')
"#;

#[async_trait::async_trait]
impl IVehicleRepo for PostgresVehicleRepo {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicles
            (vehicle_uid, license_plate, make, model, vehicle_type, status, fuel_type,
             rental_cost_per_day_eur, is_active, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(*vehicle.id.inner_ref())
        .bind(&vehicle.license_plate)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.r#type)
        .bind(vehicle.status.as_str())
        .bind(&vehicle.fuel_type)
        .bind(vehicle.rental_cost_per_day_eur)
        .bind(vehicle.is_active)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE vehicles
            SET license_plate = $2,
            make = $3,
            model = $4,
            vehicle_type = $5,
            status = $6,
            fuel_type = $7,
            rental_cost_per_day_eur = $8,
            is_active = $9,
            updated_at = $10
            WHERE vehicle_uid = $1
            "#,
        )
        .bind(*vehicle.id.inner_ref())
        .bind(&vehicle.license_plate)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.r#type)
        .bind(vehicle.status.as_str())
        .bind(&vehicle.fuel_type)
        .bind(vehicle.rental_cost_per_day_eur)
        .bind(vehicle.is_active)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, vehicle_id: &ID) -> Option<Vehicle> {
        sqlx::query_as::<_, VehicleRaw>(
            r#"
            SELECT * FROM vehicles
            WHERE vehicle_uid = $1
            AND is_active = TRUE
            "#,
        )
        .bind(*vehicle_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|v| v.into())
    }

    async fn list(
        &self,
        filters: &VehicleFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Vehicle>, i64)> {
        let status = filters.status.map(|s| s.as_str().to_string());
        let items_sql = format!(
            "SELECT v.* FROM vehicles v WHERE {} ORDER BY v.license_plate ASC OFFSET $4 LIMIT $5",
            LIST_FILTER
        );
        let count_sql = format!("SELECT COUNT(*) FROM vehicles v WHERE {}", LIST_FILTER);

        let items = sqlx::query_as::<_, VehicleRaw>(&items_sql)
            .bind(filters.vehicle_type.clone())
            .bind(status.clone())
            .bind(filters.search.clone())
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(filters.vehicle_type.clone())
            .bind(status)
            .bind(filters.search.clone())
            .fetch_one(&self.pool)
            .await?;

        Ok((items.into_iter().map(|v| v.into()).collect(), total))
    }

    async fn soft_delete(&self, vehicle_id: &ID, updated_at: i64) -> Option<Vehicle> {
        sqlx::query_as::<_, VehicleRaw>(
            r#"
            UPDATE vehicles
            SET is_active = FALSE,
            updated_at = $2
            WHERE vehicle_uid = $1
            AND is_active = TRUE
            RETURNING *
            "#,
        )
        .bind(*vehicle_id.inner_ref())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|v| v.into())
    }
}
