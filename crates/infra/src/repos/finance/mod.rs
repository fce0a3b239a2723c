mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::FinanceFilters;
use bauhub_domain::{Cost, Transaction};
pub use inmemory::{InMemoryCostRepo, InMemoryTransactionRepo};
pub use postgres::{PostgresCostRepo, PostgresTransactionRepo};

#[async_trait::async_trait]
pub trait ICostRepo: Send + Sync {
    async fn insert(&self, cost: &Cost) -> anyhow::Result<()>;
    async fn find(&self, filters: &FinanceFilters) -> anyhow::Result<Vec<Cost>>;
}

#[async_trait::async_trait]
pub trait ITransactionRepo: Send + Sync {
    async fn insert(&self, transaction: &Transaction) -> anyhow::Result<()>;
    async fn find(&self, filters: &FinanceFilters) -> anyhow::Result<Vec<Transaction>>;
}
