use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Budget, Category, MonthKey, Transaction};

use super::totals::current_month_transactions;

/// A current-month budget next to what was actually spent against it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetComparisonRow {
    pub category: Category,
    pub budgeted: f64,
    pub actual: f64,
    /// Spend as a share of the budget; exceeds 100 when overspent, 0 when
    /// nothing was budgeted.
    pub percentage: f64,
    pub color: &'static str,
}

/// Pairs each budget set for the month containing `reference` with the
/// month's expense total in that category. Most-consumed budgets first;
/// equal percentages fall back to category order.
pub fn budget_comparison(
    transactions: &[Transaction],
    budgets: &[Budget],
    reference: NaiveDate,
) -> Vec<BudgetComparisonRow> {
    let month = MonthKey::from_date(reference);
    let scoped = current_month_transactions(transactions, reference);

    let mut rows: Vec<BudgetComparisonRow> = budgets
        .iter()
        .filter(|budget| budget.month == month)
        .map(|budget| {
            let actual: f64 = scoped
                .iter()
                .filter(|txn| txn.is_expense() && txn.category == budget.category)
                .map(|txn| txn.amount)
                .sum();
            let percentage = if budget.amount > 0.0 {
                actual / budget.amount * 100.0
            } else {
                0.0
            };
            BudgetComparisonRow {
                category: budget.category,
                budgeted: budget.amount,
                actual,
                percentage,
                color: budget.category.color(),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then(a.category.cmp(&b.category))
    });
    rows
}
