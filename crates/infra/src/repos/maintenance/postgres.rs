use super::IMaintenanceRepo;
use bauhub_domain::{MaintenanceSchedule, MaintenanceStatus};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMaintenanceRepo {
    pool: PgPool,
}

impl PostgresMaintenanceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaintenanceScheduleRaw {
    schedule_uid: Uuid,
    equipment_uid: Uuid,
    maintenance_type: String,
    scheduled_date: NaiveDate,
    status: String,
}

impl Into<MaintenanceSchedule> for MaintenanceScheduleRaw {
    fn into(self) -> MaintenanceSchedule {
        MaintenanceSchedule {
            id: self.schedule_uid.into(),
            equipment_id: self.equipment_uid.into(),
            maintenance_type: self.maintenance_type,
            scheduled_date: self.scheduled_date,
            status: self.status.parse().unwrap_or(MaintenanceStatus::Scheduled),
        }
    }
}

#[async_trait::async_trait]
impl IMaintenanceRepo for PostgresMaintenanceRepo {
    async fn insert(&self, schedule: &MaintenanceSchedule) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO equipment_maintenance
            (schedule_uid, equipment_uid, maintenance_type, scheduled_date, status)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*schedule.id.inner_ref())
        .bind(*schedule.equipment_id.inner_ref())
        .bind(&schedule.maintenance_type)
        .bind(schedule.scheduled_date)
        .bind(schedule.status.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_scheduled(&self) -> anyhow::Result<Vec<MaintenanceSchedule>> {
        let schedules = sqlx::query_as::<_, MaintenanceScheduleRaw>(
            r#"
            SELECT * FROM equipment_maintenance
            WHERE status = 'scheduled'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(schedules.into_iter().map(|s| s.into()).collect())
    }
}
