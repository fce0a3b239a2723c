use super::IEquipmentAssignmentRepo;
use crate::repos::shared::query_structs::{AssignmentFilters, PageQuery};
use bauhub_domain::{EquipmentAssignment, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEquipmentAssignmentRepo {
    pool: PgPool,
}

impl PostgresEquipmentAssignmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EquipmentAssignmentRaw {
    assignment_uid: Uuid,
    equipment_uid: Uuid,
    project_uid: Uuid,
    crew_uid: Option<Uuid>,
    from_ts: i64,
    to_ts: Option<i64>,
    is_permanent: bool,
    rental_cost_per_day_eur: f64,
    notes: String,
    created_at: i64,
}

impl Into<EquipmentAssignment> for EquipmentAssignmentRaw {
    fn into(self) -> EquipmentAssignment {
        EquipmentAssignment {
            id: self.assignment_uid.into(),
            equipment_id: self.equipment_uid.into(),
            project_id: self.project_uid.into(),
            crew_id: self.crew_uid.map(|uid| uid.into()),
            from_ts: self.from_ts,
            to_ts: self.to_ts,
            is_permanent: self.is_permanent,
            rental_cost_per_day_eur: self.rental_cost_per_day_eur,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

const LIST_FILTER: &str = r#"
    ($1::uuid IS NULL OR a.equipment_uid = $1)
    AND ($2::uuid IS NULL OR a.project_uid = $2)
    AND ($3::uuid IS NULL OR a.crew_uid = $3)
    AND ($4::bool = FALSE OR a.to_ts IS NULL)
"#;

#[async_trait::async_trait]
impl IEquipmentAssignmentRepo for PostgresEquipmentAssignmentRepo {
    async fn try_insert(&self, assignment: &EquipmentAssignment) -> anyhow::Result<bool> {
        // The WHERE NOT EXISTS guard makes check and insert one statement,
        // so two racing requests cannot both claim the unit.
        let res = sqlx::query(
            r#"
            INSERT INTO equipment_assignments
            (assignment_uid, equipment_uid, project_uid, crew_uid, from_ts, to_ts,
             is_permanent, rental_cost_per_day_eur, notes, created_at)
            SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10
            WHERE NOT EXISTS (
                SELECT 1 FROM equipment_assignments
                WHERE equipment_uid = $2
                AND to_ts IS NULL
            )
            "#,
        )
        .bind(*assignment.id.inner_ref())
        .bind(*assignment.equipment_id.inner_ref())
        .bind(*assignment.project_id.inner_ref())
        .bind(assignment.crew_id.as_ref().map(|id| *id.inner_ref()))
        .bind(assignment.from_ts)
        .bind(assignment.to_ts)
        .bind(assignment.is_permanent)
        .bind(assignment.rental_cost_per_day_eur)
        .bind(&assignment.notes)
        .bind(assignment.created_at)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn find(&self, assignment_id: &ID) -> Option<EquipmentAssignment> {
        sqlx::query_as::<_, EquipmentAssignmentRaw>(
            r#"
            SELECT * FROM equipment_assignments
            WHERE assignment_uid = $1
            "#,
        )
        .bind(*assignment_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|a| a.into())
    }

    async fn find_active_by_equipment(&self, equipment_id: &ID) -> Option<EquipmentAssignment> {
        sqlx::query_as::<_, EquipmentAssignmentRaw>(
            r#"
            SELECT * FROM equipment_assignments
            WHERE equipment_uid = $1
            AND to_ts IS NULL
            "#,
        )
        .bind(*equipment_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|a| a.into())
    }

    async fn find_active_equipment_ids(&self) -> anyhow::Result<Vec<ID>> {
        let uids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT equipment_uid FROM equipment_assignments
            WHERE to_ts IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(uids.into_iter().map(|uid| uid.into()).collect())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<EquipmentAssignment>> {
        let assignments = sqlx::query_as::<_, EquipmentAssignmentRaw>(
            r#"
            SELECT * FROM equipment_assignments
            WHERE project_uid = $1
            ORDER BY from_ts DESC
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(assignments.into_iter().map(|a| a.into()).collect())
    }

    async fn list(
        &self,
        filters: &AssignmentFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<EquipmentAssignment>, i64)> {
        let items_sql = format!(
            "SELECT a.* FROM equipment_assignments a WHERE {} ORDER BY a.created_at DESC OFFSET $5 LIMIT $6",
            LIST_FILTER
        );
        let count_sql = format!(
            "SELECT COUNT(*) FROM equipment_assignments a WHERE {}",
            LIST_FILTER
        );

        let resource_uid = filters.resource_id.as_ref().map(|id| *id.inner_ref());
        let project_uid = filters.project_id.as_ref().map(|id| *id.inner_ref());
        let crew_uid = filters.crew_id.as_ref().map(|id| *id.inner_ref());

        let items = sqlx::query_as::<_, EquipmentAssignmentRaw>(&items_sql)
            .bind(resource_uid)
            .bind(project_uid)
            .bind(crew_uid)
            .bind(filters.active_only)
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(resource_uid)
            .bind(project_uid)
            .bind(crew_uid)
            .bind(filters.active_only)
            .fetch_one(&self.pool)
            .await?;

        Ok((items.into_iter().map(|a| a.into()).collect(), total))
    }

    async fn end(&self, assignment_id: &ID, to_ts: i64) -> Option<EquipmentAssignment> {
        sqlx::query_as::<_, EquipmentAssignmentRaw>(
            r#"
            UPDATE equipment_assignments
            SET to_ts = $2
            WHERE assignment_uid = $1
            AND to_ts IS NULL
            RETURNING *
            "#,
        )
        .bind(*assignment_id.inner_ref())
        .bind(to_ts)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|a| a.into())
    }
}
