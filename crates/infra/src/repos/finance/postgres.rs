use super::{ICostRepo, ITransactionRepo};
use crate::repos::shared::query_structs::FinanceFilters;
use bauhub_domain::{Cost, CostType, Transaction, TransactionType};
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresCostRepo {
    pool: PgPool,
}

impl PostgresCostRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Joined with projects so responses can carry the project name without a
// second query per row.
#[derive(Debug, FromRow)]
struct CostRaw {
    cost_uid: Uuid,
    project_uid: Uuid,
    project_name: String,
    cost_type: String,
    date: NaiveDate,
    amount_eur: f64,
    description: String,
    created_at: i64,
}

impl Into<Cost> for CostRaw {
    fn into(self) -> Cost {
        Cost {
            id: self.cost_uid.into(),
            project_id: self.project_uid.into(),
            project_name: self.project_name,
            cost_type: self.cost_type.parse().unwrap_or(CostType::Other),
            date: self.date,
            amount_eur: self.amount_eur,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[async_trait::async_trait]
impl ICostRepo for PostgresCostRepo {
    async fn insert(&self, cost: &Cost) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO costs
            (cost_uid, project_uid, cost_type, date, amount_eur, description, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*cost.id.inner_ref())
        .bind(*cost.project_id.inner_ref())
        .bind(cost.cost_type.as_str())
        .bind(cost.date)
        .bind(cost.amount_eur)
        .bind(&cost.description)
        .bind(cost.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, filters: &FinanceFilters) -> anyhow::Result<Vec<Cost>> {
        let costs = sqlx::query_as::<_, CostRaw>(
            r#"
            SELECT c.*, p.name AS project_name
            FROM costs c
            INNER JOIN projects p ON p.project_uid = c.project_uid
            WHERE ($1::uuid IS NULL OR c.project_uid = $1)
            AND ($2::date IS NULL OR c.date >= $2)
            AND ($3::date IS NULL OR c.date <= $3)
            "#,
        )
        .bind(filters.project_id.as_ref().map(|id| *id.inner_ref()))
        .bind(filters.from)
        .bind(filters.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(costs.into_iter().map(|c| c.into()).collect())
    }
}

pub struct PostgresTransactionRepo {
    pool: PgPool,
}

impl PostgresTransactionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TransactionRaw {
    transaction_uid: Uuid,
    project_uid: Uuid,
    project_name: String,
    transaction_type: String,
    date: NaiveDate,
    amount_eur: f64,
    description: String,
    created_at: i64,
}

impl Into<Transaction> for TransactionRaw {
    fn into(self) -> Transaction {
        Transaction {
            id: self.transaction_uid.into(),
            project_id: self.project_uid.into(),
            project_name: self.project_name,
            transaction_type: self
                .transaction_type
                .parse()
                .unwrap_or(TransactionType::Expense),
            date: self.date,
            amount_eur: self.amount_eur,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[async_trait::async_trait]
impl ITransactionRepo for PostgresTransactionRepo {
    async fn insert(&self, transaction: &Transaction) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions
            (transaction_uid, project_uid, transaction_type, date, amount_eur, description, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*transaction.id.inner_ref())
        .bind(*transaction.project_id.inner_ref())
        .bind(transaction.transaction_type.as_str())
        .bind(transaction.date)
        .bind(transaction.amount_eur)
        .bind(&transaction.description)
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, filters: &FinanceFilters) -> anyhow::Result<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, TransactionRaw>(
            r#"
            SELECT t.*, p.name AS project_name
            FROM transactions t
            INNER JOIN projects p ON p.project_uid = t.project_uid
            WHERE ($1::uuid IS NULL OR t.project_uid = $1)
            AND ($2::date IS NULL OR t.date >= $2)
            AND ($3::date IS NULL OR t.date <= $3)
            "#,
        )
        .bind(filters.project_id.as_ref().map(|id| *id.inner_ref()))
        .bind(filters.from)
        .bind(filters.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(transactions.into_iter().map(|t| t.into()).collect())
    }
}
