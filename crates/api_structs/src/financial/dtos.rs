use bauhub_domain::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct FinancialTotalsDTO {
    pub total_costs: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_transactions: f64,
    pub net_profit: f64,
    pub costs_count: usize,
    pub transactions_count: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TypeBreakdownDTO {
    pub r#type: String,
    pub total: f64,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MonthlyBreakdownDTO {
    pub month: u32,
    pub costs: f64,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectFinanceSummaryDTO {
    pub project_id: ID,
    pub project_name: String,
    pub total_costs: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub costs_count: usize,
    pub transactions_count: usize,
}

/// Row of the recent-activity feed, a cost or a transaction.
#[derive(Debug, Deserialize, Serialize)]
pub struct ActivityEntryDTO {
    pub id: ID,
    pub r#type: String,
    pub subtype: String,
    pub amount_eur: f64,
    pub description: String,
    pub date: NaiveDate,
    pub project: String,
    pub created_at: i64,
}
