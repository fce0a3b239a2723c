use super::IEquipmentDocumentRepo;
use bauhub_domain::EquipmentDocument;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEquipmentDocumentRepo {
    pool: PgPool,
}

impl PostgresEquipmentDocumentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EquipmentDocumentRaw {
    document_uid: Uuid,
    equipment_uid: Uuid,
    document_type: String,
    expiry_date: Option<NaiveDate>,
}

impl Into<EquipmentDocument> for EquipmentDocumentRaw {
    fn into(self) -> EquipmentDocument {
        EquipmentDocument {
            id: self.document_uid.into(),
            equipment_id: self.equipment_uid.into(),
            document_type: self.document_type,
            expiry_date: self.expiry_date,
        }
    }
}

#[async_trait::async_trait]
impl IEquipmentDocumentRepo for PostgresEquipmentDocumentRepo {
    async fn insert(&self, document: &EquipmentDocument) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO equipment_documents
            (document_uid, equipment_uid, document_type, expiry_date)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*document.id.inner_ref())
        .bind(*document.equipment_id.inner_ref())
        .bind(&document.document_type)
        .bind(document.expiry_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_with_expiry(&self) -> anyhow::Result<Vec<EquipmentDocument>> {
        let documents = sqlx::query_as::<_, EquipmentDocumentRaw>(
            r#"
            SELECT * FROM equipment_documents
            WHERE expiry_date IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(documents.into_iter().map(|d| d.into()).collect())
    }
}
