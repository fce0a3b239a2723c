use crate::financial::dtos::{
    ActivityEntryDTO, FinancialTotalsDTO, MonthlyBreakdownDTO, ProjectFinanceSummaryDTO,
    TypeBreakdownDTO,
};
use bauhub_domain::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod get_financial_summary {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub project_id: Option<ID>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub year: Option<i32>,
        pub month: Option<u32>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub summary: FinancialTotalsDTO,
        pub costs_by_type: Vec<TypeBreakdownDTO>,
        pub transactions_by_type: Vec<TypeBreakdownDTO>,
        pub monthly_breakdown: Option<Vec<MonthlyBreakdownDTO>>,
        pub project_summaries: Option<Vec<ProjectFinanceSummaryDTO>>,
        pub recent_activity: Vec<ActivityEntryDTO>,
    }
}
