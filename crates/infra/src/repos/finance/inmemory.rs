use super::{ICostRepo, ITransactionRepo};
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::FinanceFilters;
use bauhub_domain::{Cost, Transaction};

pub struct InMemoryCostRepo {
    costs: std::sync::Mutex<Vec<Cost>>,
}

impl InMemoryCostRepo {
    pub fn new() -> Self {
        Self {
            costs: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICostRepo for InMemoryCostRepo {
    async fn insert(&self, cost: &Cost) -> anyhow::Result<()> {
        insert(cost, &self.costs);
        Ok(())
    }

    async fn find(&self, filters: &FinanceFilters) -> anyhow::Result<Vec<Cost>> {
        Ok(find_by(&self.costs, |c| {
            filters
                .project_id
                .as_ref()
                .map_or(true, |id| &c.project_id == id)
                && filters.from.map_or(true, |from| c.date >= from)
                && filters.to.map_or(true, |to| c.date <= to)
        }))
    }
}

pub struct InMemoryTransactionRepo {
    transactions: std::sync::Mutex<Vec<Transaction>>,
}

impl InMemoryTransactionRepo {
    pub fn new() -> Self {
        Self {
            transactions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITransactionRepo for InMemoryTransactionRepo {
    async fn insert(&self, transaction: &Transaction) -> anyhow::Result<()> {
        insert(transaction, &self.transactions);
        Ok(())
    }

    async fn find(&self, filters: &FinanceFilters) -> anyhow::Result<Vec<Transaction>> {
        Ok(find_by(&self.transactions, |t| {
            filters
                .project_id
                .as_ref()
                .map_or(true, |id| &t.project_id == id)
                && filters.from.map_or(true, |from| t.date >= from)
                && filters.to.map_or(true, |to| t.date <= to)
        }))
    }
}
