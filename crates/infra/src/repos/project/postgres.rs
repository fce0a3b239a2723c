use super::{ICrewRepo, IProjectRepo};
use bauhub_domain::{Crew, Project, ID};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresProjectRepo {
    pool: PgPool,
}

impl PostgresProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRaw {
    project_uid: Uuid,
    name: String,
    city: String,
    status: String,
    start_date: Option<NaiveDate>,
    end_date_plan: Option<NaiveDate>,
    pm_user_uid: Option<Uuid>,
    budget_eur: f64,
}

impl Into<Project> for ProjectRaw {
    fn into(self) -> Project {
        Project {
            id: self.project_uid.into(),
            name: self.name,
            city: self.city,
            status: self.status.parse().unwrap_or_default(),
            start_date: self.start_date,
            end_date_plan: self.end_date_plan,
            pm_user_id: self.pm_user_uid.map(|uid| uid.into()),
            budget_eur: self.budget_eur,
        }
    }
}

#[async_trait::async_trait]
impl IProjectRepo for PostgresProjectRepo {
    async fn insert(&self, project: &Project) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO projects
            (project_uid, name, city, status, start_date, end_date_plan, pm_user_uid, budget_eur)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(*project.id.inner_ref())
        .bind(&project.name)
        .bind(&project.city)
        .bind(project.status.as_str())
        .bind(project.start_date)
        .bind(project.end_date_plan)
        .bind(project.pm_user_id.as_ref().map(|id| *id.inner_ref()))
        .bind(project.budget_eur)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, project: &Project) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE projects
            SET name = $2,
            city = $3,
            status = $4,
            start_date = $5,
            end_date_plan = $6,
            pm_user_uid = $7,
            budget_eur = $8
            WHERE project_uid = $1
            "#,
        )
        .bind(*project.id.inner_ref())
        .bind(&project.name)
        .bind(&project.city)
        .bind(project.status.as_str())
        .bind(project.start_date)
        .bind(project.end_date_plan)
        .bind(project.pm_user_id.as_ref().map(|id| *id.inner_ref()))
        .bind(project.budget_eur)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, project_id: &ID) -> Option<Project> {
        sqlx::query_as::<_, ProjectRaw>(
            r#"
            SELECT * FROM projects
            WHERE project_uid = $1
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|p| p.into())
    }

    async fn find_pm_user_id(&self, project_id: &ID) -> Option<ID> {
        let pm_uid: Option<Option<Uuid>> = sqlx::query_scalar(
            r#"
            SELECT pm_user_uid FROM projects
            WHERE project_uid = $1
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten();
        pm_uid.flatten().map(|uid| uid.into())
    }

    async fn find_with_upcoming_start(&self) -> anyhow::Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, ProjectRaw>(
            r#"
            SELECT * FROM projects
            WHERE status IN ('draft', 'planning', 'active')
            AND start_date IS NOT NULL
            AND pm_user_uid IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(projects.into_iter().map(|p| p.into()).collect())
    }

    async fn find_active_with_end_plan(&self) -> anyhow::Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, ProjectRaw>(
            r#"
            SELECT * FROM projects
            WHERE status = 'active'
            AND end_date_plan IS NOT NULL
            AND pm_user_uid IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(projects.into_iter().map(|p| p.into()).collect())
    }
}

pub struct PostgresCrewRepo {
    pool: PgPool,
}

impl PostgresCrewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CrewRaw {
    crew_uid: Uuid,
    name: String,
    project_uid: Uuid,
}

impl Into<Crew> for CrewRaw {
    fn into(self) -> Crew {
        Crew {
            id: self.crew_uid.into(),
            name: self.name,
            project_id: self.project_uid.into(),
        }
    }
}

#[async_trait::async_trait]
impl ICrewRepo for PostgresCrewRepo {
    async fn insert(&self, crew: &Crew) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO crews(crew_uid, name, project_uid)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(*crew.id.inner_ref())
        .bind(&crew.name)
        .bind(*crew.project_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, crew_id: &ID) -> Option<Crew> {
        sqlx::query_as::<_, CrewRaw>(
            r#"
            SELECT * FROM crews
            WHERE crew_uid = $1
            "#,
        )
        .bind(*crew_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|c| c.into())
    }

    async fn find_in_project(&self, crew_id: &ID, project_id: &ID) -> Option<Crew> {
        sqlx::query_as::<_, CrewRaw>(
            r#"
            SELECT * FROM crews
            WHERE crew_uid = $1
            AND project_uid = $2
            "#,
        )
        .bind(*crew_id.inner_ref())
        .bind(*project_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|c| c.into())
    }
}
