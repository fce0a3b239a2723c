use super::{IDocumentRepo, IProjectPlanRepo};
use bauhub_domain::{Document, ProjectPlan, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresDocumentRepo {
    pool: PgPool,
}

impl PostgresDocumentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRaw {
    document_uid: Uuid,
    project_uid: Uuid,
    filename: String,
    original_filename: String,
    file_type: String,
    file_size: i64,
    document_type: String,
    description: String,
    uploaded_by: Option<Uuid>,
    upload_date: i64,
    is_active: bool,
}

impl Into<Document> for DocumentRaw {
    fn into(self) -> Document {
        Document {
            id: self.document_uid.into(),
            project_id: self.project_uid.into(),
            filename: self.filename,
            original_filename: self.original_filename,
            file_type: self.file_type,
            file_size: self.file_size,
            document_type: self.document_type,
            description: self.description,
            uploaded_by: self.uploaded_by.map(|uid| uid.into()),
            upload_date: self.upload_date,
            is_active: self.is_active,
        }
    }
}

#[async_trait::async_trait]
impl IDocumentRepo for PostgresDocumentRepo {
    async fn insert(&self, document: &Document) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents
            (document_uid, project_uid, filename, original_filename, file_type,
             file_size, document_type, description, uploaded_by, upload_date, is_active)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(*document.id.inner_ref())
        .bind(*document.project_id.inner_ref())
        .bind(&document.filename)
        .bind(&document.original_filename)
        .bind(&document.file_type)
        .bind(document.file_size)
        .bind(&document.document_type)
        .bind(&document.description)
        .bind(document.uploaded_by.as_ref().map(|id| *id.inner_ref()))
        .bind(document.upload_date)
        .bind(document.is_active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<Document>> {
        let documents = sqlx::query_as::<_, DocumentRaw>(
            r#"
            SELECT * FROM documents
            WHERE project_uid = $1
            AND is_active = TRUE
            ORDER BY upload_date DESC
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(documents.into_iter().map(|d| d.into()).collect())
    }
}

pub struct PostgresProjectPlanRepo {
    pool: PgPool,
}

impl PostgresProjectPlanRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectPlanRaw {
    plan_uid: Uuid,
    project_uid: Uuid,
    filename: String,
    plan_type: String,
    file_size: i64,
    description: String,
    created_at: i64,
}

impl Into<ProjectPlan> for ProjectPlanRaw {
    fn into(self) -> ProjectPlan {
        ProjectPlan {
            id: self.plan_uid.into(),
            project_id: self.project_uid.into(),
            filename: self.filename,
            plan_type: self.plan_type,
            file_size: self.file_size,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IProjectPlanRepo for PostgresProjectPlanRepo {
    async fn insert(&self, plan: &ProjectPlan) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO project_plans
            (plan_uid, project_uid, filename, plan_type, file_size, description, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*plan.id.inner_ref())
        .bind(*plan.project_id.inner_ref())
        .bind(&plan.filename)
        .bind(&plan.plan_type)
        .bind(plan.file_size)
        .bind(&plan.description)
        .bind(plan.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_project(&self, project_id: &ID) -> anyhow::Result<Vec<ProjectPlan>> {
        let plans = sqlx::query_as::<_, ProjectPlanRaw>(
            r#"
            SELECT * FROM project_plans
            WHERE project_uid = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(*project_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(plans.into_iter().map(|p| p.into()).collect())
    }
}
