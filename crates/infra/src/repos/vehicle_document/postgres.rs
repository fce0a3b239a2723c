use super::IVehicleDocumentRepo;
use bauhub_domain::VehicleDocument;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresVehicleDocumentRepo {
    pool: PgPool,
}

impl PostgresVehicleDocumentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VehicleDocumentRaw {
    document_uid: Uuid,
    vehicle_uid: Uuid,
    document_type: String,
    expiry_date: Option<NaiveDate>,
}

impl Into<VehicleDocument> for VehicleDocumentRaw {
    fn into(self) -> VehicleDocument {
        VehicleDocument {
            id: self.document_uid.into(),
            vehicle_id: self.vehicle_uid.into(),
            document_type: self.document_type,
            expiry_date: self.expiry_date,
        }
    }
}

#[async_trait::async_trait]
impl IVehicleDocumentRepo for PostgresVehicleDocumentRepo {
    async fn insert(&self, document: &VehicleDocument) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicle_documents
            (document_uid, vehicle_uid, document_type, expiry_date)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*document.id.inner_ref())
        .bind(*document.vehicle_id.inner_ref())
        .bind(&document.document_type)
        .bind(document.expiry_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_with_expiry(&self) -> anyhow::Result<Vec<VehicleDocument>> {
        let documents = sqlx::query_as::<_, VehicleDocumentRaw>(
            r#"
            SELECT * FROM vehicle_documents
            WHERE expiry_date IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(documents.into_iter().map(|d| d.into()).collect())
    }
}
