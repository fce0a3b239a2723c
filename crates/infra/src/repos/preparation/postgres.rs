use super::{IFacilityRepo, IHousingUnitRepo, IWorkEntryRepo};
use bauhub_domain::{Facility, HousingUnit, WorkEntry, ID};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresFacilityRepo {
    pool: PgPool,
}

impl PostgresFacilityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FacilityRaw {
    facility_uid: Uuid,
    project_uid: Uuid,
    name: String,
    rent_daily_eur: f64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl Into<Facility> for FacilityRaw {
    fn into(self) -> Facility {
        Facility {
            id: self.facility_uid.into(),
            project_id: self.project_uid.into(),
            name: self.name,
            rent_daily_eur: self.rent_daily_eur,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[async_trait::async_trait]
impl IFacilityRepo for PostgresFacilityRepo {
    async fn insert(&self, facility: &Facility) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO facilities
            (facility_uid, project_uid, name, rent_daily_eur, start_date, end_date)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*facility.id.inner_ref())
        .bind(*facility.project_id.inner_ref())
        .bind(&facility.name)
        .bind(facility.rent_daily_eur)
        .bind(facility.start_date)
        .bind(facility.end_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<Facility>> {
        let facilities = sqlx::query_as::<_, FacilityRaw>(
            r#"
            SELECT * FROM facilities
            WHERE project_uid = $1
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(facilities.into_iter().map(|f| f.into()).collect())
    }
}

pub struct PostgresHousingUnitRepo {
    pool: PgPool,
}

impl PostgresHousingUnitRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HousingUnitRaw {
    housing_uid: Uuid,
    project_uid: Uuid,
    address: String,
    rent_daily_eur: f64,
    check_in_date: Option<NaiveDate>,
    check_out_date: Option<NaiveDate>,
}

impl Into<HousingUnit> for HousingUnitRaw {
    fn into(self) -> HousingUnit {
        HousingUnit {
            id: self.housing_uid.into(),
            project_id: self.project_uid.into(),
            address: self.address,
            rent_daily_eur: self.rent_daily_eur,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
        }
    }
}

#[async_trait::async_trait]
impl IHousingUnitRepo for PostgresHousingUnitRepo {
    async fn insert(&self, unit: &HousingUnit) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO housing_units
            (housing_uid, project_uid, address, rent_daily_eur, check_in_date, check_out_date)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*unit.id.inner_ref())
        .bind(*unit.project_id.inner_ref())
        .bind(&unit.address)
        .bind(unit.rent_daily_eur)
        .bind(unit.check_in_date)
        .bind(unit.check_out_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<HousingUnit>> {
        let units = sqlx::query_as::<_, HousingUnitRaw>(
            r#"
            SELECT * FROM housing_units
            WHERE project_uid = $1
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(units.into_iter().map(|u| u.into()).collect())
    }
}

pub struct PostgresWorkEntryRepo {
    pool: PgPool,
}

impl PostgresWorkEntryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WorkEntryRaw {
    entry_uid: Uuid,
    project_uid: Uuid,
    date: NaiveDate,
    labor_cost_eur: f64,
}

impl Into<WorkEntry> for WorkEntryRaw {
    fn into(self) -> WorkEntry {
        WorkEntry {
            id: self.entry_uid.into(),
            project_id: self.project_uid.into(),
            date: self.date,
            labor_cost_eur: self.labor_cost_eur,
        }
    }
}

#[async_trait::async_trait]
impl IWorkEntryRepo for PostgresWorkEntryRepo {
    async fn insert(&self, entry: &WorkEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO work_entries
            (entry_uid, project_uid, date, labor_cost_eur)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*entry.id.inner_ref())
        .bind(*entry.project_id.inner_ref())
        .bind(entry.date)
        .bind(entry.labor_cost_eur)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<WorkEntry>> {
        let entries = sqlx::query_as::<_, WorkEntryRaw>(
            r#"
            SELECT * FROM work_entries
            WHERE project_uid = $1
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(entries.into_iter().map(|e| e.into()).collect())
    }
}
