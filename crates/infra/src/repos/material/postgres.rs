use super::{IMaterialAllocationRepo, IMaterialOrderRepo};
use bauhub_domain::{MaterialAllocation, MaterialOrder, MaterialOrderStatus, ID};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMaterialOrderRepo {
    pool: PgPool,
}

impl PostgresMaterialOrderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaterialOrderRaw {
    order_uid: Uuid,
    project_uid: Uuid,
    supplier: String,
    status: String,
    expected_delivery_date: Option<NaiveDate>,
}

impl Into<MaterialOrder> for MaterialOrderRaw {
    fn into(self) -> MaterialOrder {
        MaterialOrder {
            id: self.order_uid.into(),
            project_id: self.project_uid.into(),
            supplier: self.supplier,
            status: self.status.parse().unwrap_or(MaterialOrderStatus::Draft),
            expected_delivery_date: self.expected_delivery_date,
        }
    }
}

#[async_trait::async_trait]
impl IMaterialOrderRepo for PostgresMaterialOrderRepo {
    async fn insert(&self, order: &MaterialOrder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO material_orders
            (order_uid, project_uid, supplier, status, expected_delivery_date)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*order.id.inner_ref())
        .bind(*order.project_id.inner_ref())
        .bind(&order.supplier)
        .bind(order.status.as_str())
        .bind(order.expected_delivery_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_awaiting_delivery(&self) -> anyhow::Result<Vec<MaterialOrder>> {
        let orders = sqlx::query_as::<_, MaterialOrderRaw>(
            r#"
            SELECT * FROM material_orders
            WHERE status IN ('ordered', 'confirmed')
            AND expected_delivery_date IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(orders.into_iter().map(|o| o.into()).collect())
    }
}

pub struct PostgresMaterialAllocationRepo {
    pool: PgPool,
}

impl PostgresMaterialAllocationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaterialAllocationRaw {
    allocation_uid: Uuid,
    project_uid: Uuid,
    material_uid: Uuid,
    material_name: String,
    unit: String,
    price_per_unit_eur: f64,
    quantity: f64,
    allocated_at: i64,
}

impl Into<MaterialAllocation> for MaterialAllocationRaw {
    fn into(self) -> MaterialAllocation {
        MaterialAllocation {
            id: self.allocation_uid.into(),
            project_id: self.project_uid.into(),
            material_id: self.material_uid.into(),
            material_name: self.material_name,
            unit: self.unit,
            price_per_unit_eur: self.price_per_unit_eur,
            quantity: self.quantity,
            allocated_at: self.allocated_at,
        }
    }
}

#[async_trait::async_trait]
impl IMaterialAllocationRepo for PostgresMaterialAllocationRepo {
    async fn insert(&self, allocation: &MaterialAllocation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO material_allocations
            (allocation_uid, project_uid, material_uid, material_name, unit,
             price_per_unit_eur, quantity, allocated_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(*allocation.id.inner_ref())
        .bind(*allocation.project_id.inner_ref())
        .bind(*allocation.material_id.inner_ref())
        .bind(&allocation.material_name)
        .bind(&allocation.unit)
        .bind(allocation.price_per_unit_eur)
        .bind(allocation.quantity)
        .bind(allocation.allocated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<MaterialAllocation>> {
        let allocations = sqlx::query_as::<_, MaterialAllocationRaw>(
            r#"
            SELECT * FROM material_allocations
            WHERE project_uid = $1
            ORDER BY allocated_at DESC
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(allocations.into_iter().map(|a| a.into()).collect())
    }
}
