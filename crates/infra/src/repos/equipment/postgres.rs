use super::IEquipmentRepo;
use crate::repos::shared::query_structs::{EquipmentFilters, PageQuery};
use bauhub_domain::{Equipment, ID};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEquipmentRepo {
    pool: PgPool,
}

impl PostgresEquipmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EquipmentRaw {
    equipment_uid: Uuid,
    name: String,
    equipment_type: String,
    inventory_no: String,
    owned: bool,
    status: String,
    rental_cost_per_day_eur: f64,
    purchase_date: Option<NaiveDate>,
    warranty_until: Option<NaiveDate>,
    description: String,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl Into<Equipment> for EquipmentRaw {
    fn into(self) -> Equipment {
        Equipment {
            id: self.equipment_uid.into(),
            name: self.name,
            r#type: self.equipment_type,
            inventory_no: self.inventory_no,
            owned: self.owned,
            status: self.status.parse().unwrap_or_default(),
            rental_cost_per_day_eur: self.rental_cost_per_day_eur,
            purchase_date: self.purchase_date,
            warranty_until: self.warranty_until,
            description: self.description,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// Shared WHERE clause of `list`; $1..$5 are the optional filters.
const LIST_FILTER: &str = r#"
    e.is_active = TRUE
    AND ($1::text IS NULL OR e.equipment_type = $1)
    AND ($2::text IS NULL OR e.status = $2)
    AND ($3::bool IS NULL OR e.owned = $3)
    AND ($4::text IS NULL OR e.name ILIKE '%' || $4 || '%'
         OR e.inventory_no ILIKE '%' || $4 || '%'
         OR e.equipment_type ILIKE '%' || $4 || '%'
         OR e.description ILIKE '%' || $4 || '%')
    AND NOT (e.equipment_uid = ANY($5))
"#;

#[async_trait::async_trait]
impl IEquipmentRepo for PostgresEquipmentRepo {
    async fn insert(&self, equipment: &Equipment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO equipment
            (equipment_uid, name, equipment_type, inventory_no, owned, status,
             rental_cost_per_day_eur, purchase_date, warranty_until, description,
             is_active, created_at, updated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(*equipment.id.inner_ref())
        .bind(&equipment.name)
        .bind(&equipment.r#type)
        .bind(&equipment.inventory_no)
        .bind(equipment.owned)
        .bind(equipment.status.as_str())
        .bind(equipment.rental_cost_per_day_eur)
        .bind(equipment.purchase_date)
        .bind(equipment.warranty_until)
        .bind(&equipment.description)
        .bind(equipment.is_active)
        .bind(equipment.created_at)
        .bind(equipment.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, equipment: &Equipment) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE equipment
            SET name = $2,
            equipment_type = $3,
            inventory_no = $4,
            owned = $5,
            status = $6,
            rental_cost_per_day_eur = $7,
            purchase_date = $8,
            warranty_until = $9,
            description = $10,
            is_active = $11,
            updated_at = $12
            WHERE equipment_uid = $1
            "#,
        )
        .bind(*equipment.id.inner_ref())
        .bind(&equipment.name)
        .bind(&equipment.r#type)
        .bind(&equipment.inventory_no)
        .bind(equipment.owned)
        .bind(equipment.status.as_str())
        .bind(equipment.rental_cost_per_day_eur)
        .bind(equipment.purchase_date)
        .bind(equipment.warranty_until)
        .bind(&equipment.description)
        .bind(equipment.is_active)
        .bind(equipment.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, equipment_id: &ID) -> Option<Equipment> {
        sqlx::query_as::<_, EquipmentRaw>(
            r#"
            SELECT * FROM equipment
            WHERE equipment_uid = $1
            AND is_active = TRUE
            "#,
        )
        .bind(*equipment_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|e| e.into())
    }

    async fn find_all_active(&self) -> anyhow::Result<Vec<Equipment>> {
        let equipment = sqlx::query_as::<_, EquipmentRaw>(
            r#"
            SELECT * FROM equipment
            WHERE is_active = TRUE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(equipment.into_iter().map(|e| e.into()).collect())
    }

    async fn list(
        &self,
        filters: &EquipmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Equipment>, i64)> {
        let status = filters.status.map(|s| s.as_str().to_string());
        let exclude_uids: Vec<Uuid> = filters
            .exclude_ids
            .iter()
            .map(|id| *id.inner_ref())
            .collect();
        let items_sql = format!(
            "SELECT e.* FROM equipment e WHERE {} ORDER BY e.name ASC OFFSET $6 LIMIT $7",
            LIST_FILTER
        );
        let count_sql = format!("SELECT COUNT(*) FROM equipment e WHERE {}", LIST_FILTER);

        let items = sqlx::query_as::<_, EquipmentRaw>(&items_sql)
            .bind(filters.equipment_type.clone())
            .bind(status.clone())
            .bind(filters.owned)
            .bind(filters.search.clone())
            .bind(exclude_uids.clone())
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(filters.equipment_type.clone())
            .bind(status)
            .bind(filters.owned)
            .bind(filters.search.clone())
            .bind(exclude_uids)
            .fetch_one(&self.pool)
            .await?;

        Ok((items.into_iter().map(|e| e.into()).collect(), total))
    }

    async fn soft_delete(&self, equipment_id: &ID, updated_at: i64) -> Option<Equipment> {
        sqlx::query_as::<_, EquipmentRaw>(
            r#"
            UPDATE equipment
            SET is_active = FALSE,
            updated_at = $2
            WHERE equipment_uid = $1
            AND is_active = TRUE
            RETURNING *
            "#,
        )
        .bind(*equipment_id.inner_ref())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|e| e.into())
    }
}
