use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use bauhub_api_structs::dtos::{
    ActivityEntryDTO, FinancialTotalsDTO, MonthlyBreakdownDTO, ProjectFinanceSummaryDTO,
    TypeBreakdownDTO,
};
use bauhub_api_structs::get_financial_summary::*;
use bauhub_domain::{Cost, Transaction, TransactionType, ID};
use bauhub_infra::{Context, FinanceFilters};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

const RECENT_ACTIVITY_LIMIT: usize = 10;

pub async fn get_financial_summary_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let usecase = GetFinancialSummaryUseCase {
        project_id: query_params.project_id.clone(),
        start_date: query_params.start_date,
        end_date: query_params.end_date,
        year: query_params.year,
        month: query_params.month,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GetFinancialSummaryUseCase {
    pub project_id: Option<ID>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidDateFilter,
    StorageError,
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidDateFilter => {
                Self::BadClientData("Invalid date range filter".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|d| d.pred())
}

impl GetFinancialSummaryUseCase {
    /// Resolves the precedence of the three filter styles:
    /// explicit range > year+month > year.
    fn date_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            return Ok((Some(start), Some(end)));
        }
        if let Some(year) = self.year {
            if let Some(month) = self.month {
                let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(())?;
                let end = last_day_of_month(year, month).ok_or(())?;
                return Ok((Some(start), Some(end)));
            }
            let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(())?;
            let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(())?;
            return Ok((Some(start), Some(end)));
        }
        Ok((None, None))
    }
}

fn breakdown<T, K: FnMut(&T) -> String, A: FnMut(&T) -> f64>(
    items: &[T],
    mut key: K,
    mut amount: A,
) -> Vec<TypeBreakdownDTO> {
    let mut by_type: HashMap<String, (f64, usize)> = HashMap::new();
    let mut grand_total = 0.0;
    for item in items {
        let entry = by_type.entry(key(item)).or_insert((0.0, 0));
        entry.0 += amount(item);
        entry.1 += 1;
        grand_total += amount(item);
    }
    let mut breakdown: Vec<TypeBreakdownDTO> = by_type
        .into_iter()
        .map(|(r#type, (total, count))| TypeBreakdownDTO {
            r#type,
            total,
            count,
            percentage: if grand_total > 0.0 {
                (total / grand_total * 100.0 * 100.0).round() / 100.0
            } else {
                0.0
            },
        })
        .collect();
    breakdown.sort_by(|a, b| a.r#type.cmp(&b.r#type));
    breakdown
}

fn monthly_breakdown(costs: &[Cost], transactions: &[Transaction]) -> Vec<MonthlyBreakdownDTO> {
    (1..=12)
        .map(|month| {
            let month_costs: f64 = costs
                .iter()
                .filter(|c| c.date.month() == month)
                .map(|c| c.amount_eur)
                .sum();
            let income: f64 = transactions
                .iter()
                .filter(|t| {
                    t.date.month() == month && t.transaction_type == TransactionType::Income
                })
                .map(|t| t.amount_eur)
                .sum();
            let expenses: f64 = transactions
                .iter()
                .filter(|t| {
                    t.date.month() == month && t.transaction_type == TransactionType::Expense
                })
                .map(|t| t.amount_eur)
                .sum();
            MonthlyBreakdownDTO {
                month,
                costs: month_costs,
                income,
                expenses,
                net: income - expenses - month_costs,
            }
        })
        .collect()
}

fn project_summaries(costs: &[Cost], transactions: &[Transaction]) -> Vec<ProjectFinanceSummaryDTO> {
    let mut by_project: HashMap<ID, ProjectFinanceSummaryDTO> = HashMap::new();
    for cost in costs {
        let entry = by_project
            .entry(cost.project_id.clone())
            .or_insert_with(|| ProjectFinanceSummaryDTO {
                project_id: cost.project_id.clone(),
                project_name: cost.project_name.clone(),
                total_costs: 0.0,
                total_income: 0.0,
                total_expenses: 0.0,
                net_profit: 0.0,
                costs_count: 0,
                transactions_count: 0,
            });
        entry.total_costs += cost.amount_eur;
        entry.costs_count += 1;
    }
    for transaction in transactions {
        let entry = by_project
            .entry(transaction.project_id.clone())
            .or_insert_with(|| ProjectFinanceSummaryDTO {
                project_id: transaction.project_id.clone(),
                project_name: transaction.project_name.clone(),
                total_costs: 0.0,
                total_income: 0.0,
                total_expenses: 0.0,
                net_profit: 0.0,
                costs_count: 0,
                transactions_count: 0,
            });
        match transaction.transaction_type {
            TransactionType::Income => entry.total_income += transaction.amount_eur,
            TransactionType::Expense => entry.total_expenses += transaction.amount_eur,
        }
        entry.transactions_count += 1;
    }
    let mut summaries: Vec<_> = by_project
        .into_iter()
        .map(|(_, mut summary)| {
            summary.net_profit =
                summary.total_income - summary.total_expenses - summary.total_costs;
            summary
        })
        .collect();
    summaries.sort_by(|a, b| a.project_name.cmp(&b.project_name));
    summaries
}

fn recent_activity(costs: &[Cost], transactions: &[Transaction]) -> Vec<ActivityEntryDTO> {
    let mut activity: Vec<ActivityEntryDTO> = costs
        .iter()
        .map(|c| ActivityEntryDTO {
            id: c.id.clone(),
            r#type: "cost".into(),
            subtype: c.cost_type.as_str().into(),
            amount_eur: c.amount_eur,
            description: c.description.clone(),
            date: c.date,
            project: c.project_name.clone(),
            created_at: c.created_at,
        })
        .chain(transactions.iter().map(|t| ActivityEntryDTO {
            id: t.id.clone(),
            r#type: "transaction".into(),
            subtype: t.transaction_type.as_str().into(),
            amount_eur: t.amount_eur,
            description: t.description.clone(),
            date: t.date,
            project: t.project_name.clone(),
            created_at: t.created_at,
        }))
        .collect();
    activity.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    activity.truncate(RECENT_ACTIVITY_LIMIT);
    activity
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetFinancialSummaryUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetFinancialSummary";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let (from, to) = self
            .date_range()
            .map_err(|_| UseCaseError::InvalidDateFilter)?;
        let filters = FinanceFilters {
            project_id: self.project_id.clone(),
            from,
            to,
        };

        let (costs, transactions) = futures::join!(
            ctx.repos.costs.find(&filters),
            ctx.repos.transactions.find(&filters)
        );
        let costs = costs.map_err(|_| UseCaseError::StorageError)?;
        let transactions = transactions.map_err(|_| UseCaseError::StorageError)?;

        let total_costs: f64 = costs.iter().map(|c| c.amount_eur).sum();
        let total_income: f64 = transactions
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Income)
            .map(|t| t.amount_eur)
            .sum();
        let total_expenses: f64 = transactions
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Expense)
            .map(|t| t.amount_eur)
            .sum();

        Ok(APIResponse {
            summary: FinancialTotalsDTO {
                total_costs,
                total_income,
                total_expenses,
                total_transactions: total_income + total_expenses,
                net_profit: total_income - total_expenses - total_costs,
                costs_count: costs.len(),
                transactions_count: transactions.len(),
            },
            costs_by_type: breakdown(
                &costs,
                |c| c.cost_type.as_str().into(),
                |c| c.amount_eur,
            ),
            transactions_by_type: breakdown(
                &transactions,
                |t| t.transaction_type.as_str().into(),
                |t| t.amount_eur,
            ),
            monthly_breakdown: self
                .year
                .map(|_| monthly_breakdown(&costs, &transactions)),
            project_summaries: match self.project_id {
                Some(_) => None,
                None => Some(project_summaries(&costs, &transactions)),
            },
            recent_activity: recent_activity(&costs, &transactions),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{CostType, Project};

    async fn seed(ctx: &Context) -> Project {
        let project = Project {
            id: Default::default(),
            name: "Bypass road".into(),
            city: "Jena".into(),
            status: Default::default(),
            start_date: None,
            end_date_plan: None,
            pm_user_id: None,
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();
        ctx.repos
            .costs
            .insert(&Cost {
                id: Default::default(),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                cost_type: CostType::Material,
                date: NaiveDate::from_ymd(2024, 2, 10),
                amount_eur: 300.0,
                description: "Cable".into(),
                created_at: 1,
            })
            .await
            .unwrap();
        ctx.repos
            .transactions
            .insert(&Transaction {
                id: Default::default(),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                transaction_type: TransactionType::Income,
                date: NaiveDate::from_ymd(2024, 2, 20),
                amount_eur: 1_000.0,
                description: "Progress payment".into(),
                created_at: 2,
            })
            .await
            .unwrap();
        ctx.repos
            .transactions
            .insert(&Transaction {
                id: Default::default(),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                transaction_type: TransactionType::Expense,
                date: NaiveDate::from_ymd(2024, 3, 5),
                amount_eur: 200.0,
                description: "Fuel".into(),
                created_at: 3,
            })
            .await
            .unwrap();
        project
    }

    #[actix_web::main]
    #[test]
    async fn computes_totals_and_net_profit() {
        let ctx = Context::create_inmemory();
        seed(&ctx).await;

        let mut usecase = GetFinancialSummaryUseCase {
            project_id: None,
            start_date: None,
            end_date: None,
            year: None,
            month: None,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.summary.total_costs, 300.0);
        assert_eq!(res.summary.total_income, 1_000.0);
        assert_eq!(res.summary.total_expenses, 200.0);
        assert_eq!(res.summary.net_profit, 500.0);
        assert!(res.monthly_breakdown.is_none());
        let summaries = res.project_summaries.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].net_profit, 500.0);
    }

    #[actix_web::main]
    #[test]
    async fn year_filter_enables_monthly_breakdown() {
        let ctx = Context::create_inmemory();
        seed(&ctx).await;

        let mut usecase = GetFinancialSummaryUseCase {
            project_id: None,
            start_date: None,
            end_date: None,
            year: Some(2024),
            month: None,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        let monthly = res.monthly_breakdown.unwrap();
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[1].income, 1_000.0);
        assert_eq!(monthly[1].costs, 300.0);
        assert_eq!(monthly[2].expenses, 200.0);
    }

    #[actix_web::main]
    #[test]
    async fn month_filter_narrows_the_range() {
        let ctx = Context::create_inmemory();
        seed(&ctx).await;

        let mut usecase = GetFinancialSummaryUseCase {
            project_id: None,
            start_date: None,
            end_date: None,
            year: Some(2024),
            month: Some(2),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.summary.total_income, 1_000.0);
        assert_eq!(res.summary.total_expenses, 0.0);
    }
}
