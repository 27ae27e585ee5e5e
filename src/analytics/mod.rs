//! Pure aggregation over record snapshots. Nothing in this module touches a
//! store or caches results; callers pass the full collections plus today's
//! date and get a freshly computed view back.

pub mod breakdown;
pub mod comparison;
pub mod insights;
pub mod totals;
pub mod trend;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Budget, Transaction};

pub use breakdown::{category_breakdown, CategorySlice};
pub use comparison::{budget_comparison, BudgetComparisonRow};
pub use insights::{generate_insights, Insight, InsightKind};
pub use totals::{
    balance, current_month_transactions, recent_transactions, total_expenses, total_income,
};
pub use trend::{monthly_trend, MonthlyFlow};

/// How many transactions the recent list carries.
pub const RECENT_LIMIT: usize = 5;
/// How many trailing months the trend covers, current month included.
pub const TREND_MONTHS: usize = 6;

/// Everything a dashboard needs, computed in one pass over the snapshots.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSnapshot {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub recent: Vec<Transaction>,
    pub breakdown: Vec<CategorySlice>,
    pub comparison: Vec<BudgetComparisonRow>,
    pub insights: Vec<Insight>,
    pub trend: Vec<MonthlyFlow>,
}

impl DashboardSnapshot {
    /// Derives the full dashboard view. Totals span all history; the
    /// breakdown, comparison, and insights are scoped to the calendar month
    /// containing `today`.
    pub fn build(transactions: &[Transaction], budgets: &[Budget], today: NaiveDate) -> Self {
        let breakdown = category_breakdown(transactions, today);
        let comparison = budget_comparison(transactions, budgets, today);
        let insights = generate_insights(transactions, &breakdown, &comparison, today);
        Self {
            total_income: total_income(transactions),
            total_expenses: total_expenses(transactions),
            balance: balance(transactions),
            recent: recent_transactions(transactions, RECENT_LIMIT),
            breakdown,
            comparison,
            insights,
            trend: monthly_trend(transactions, TREND_MONTHS, today),
        }
    }
}
