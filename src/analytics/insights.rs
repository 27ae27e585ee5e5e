use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Transaction;

use super::breakdown::CategorySlice;
use super::comparison::BudgetComparisonRow;
use super::totals::current_month_transactions;

/// Cap on how many insights a dashboard shows.
pub const MAX_INSIGHTS: usize = 5;
/// Budget consumption above this share earns an approaching-limit notice.
pub const BUDGET_ATTENTION_THRESHOLD: f64 = 80.0;
/// Savings rate above this share of income earns a congratulation.
pub const HEALTHY_SAVINGS_RATE: f64 = 20.0;
/// Below this many insights, a setup prompt pads the list.
pub const MIN_INSIGHTS_BEFORE_PLACEHOLDER: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Warning,
    Success,
}

/// A short observation about the current month, with an optional dollar
/// figure to show alongside it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
    pub value: Option<String>,
}

impl Insight {
    fn new(kind: InsightKind, message: impl Into<String>, value: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            value,
        }
    }
}

/// Walks a fixed rule list over the month's numbers: exceeded budgets first,
/// then budgets close to their limit, the top spending category, the savings
/// rate, and finally a setup prompt when little else came up. At most
/// [`MAX_INSIGHTS`] survive.
pub fn generate_insights(
    transactions: &[Transaction],
    breakdown: &[CategorySlice],
    comparison: &[BudgetComparisonRow],
    reference: NaiveDate,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    for row in comparison.iter().filter(|row| row.percentage > 100.0) {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "You've exceeded your {} budget by {:.1}%",
                row.category,
                row.percentage - 100.0
            ),
            Some(format!("${:.0} over budget", row.actual - row.budgeted)),
        ));
    }

    for row in comparison
        .iter()
        .filter(|row| row.percentage > BUDGET_ATTENTION_THRESHOLD && row.percentage <= 100.0)
    {
        insights.push(Insight::new(
            InsightKind::Info,
            format!(
                "You're at {:.1}% of your {} budget",
                row.percentage, row.category
            ),
            Some(format!("${:.0} remaining", row.budgeted - row.actual)),
        ));
    }

    if let Some(top) = breakdown.first() {
        insights.push(Insight::new(
            InsightKind::Info,
            format!(
                "{} is your highest expense category this month",
                top.category
            ),
            Some(format!("${:.0} ({:.1}%)", top.amount, top.percentage)),
        ));
    }

    let scoped = current_month_transactions(transactions, reference);
    let month_income: f64 = scoped
        .iter()
        .filter(|txn| txn.is_income())
        .map(|txn| txn.amount)
        .sum();
    let month_expenses: f64 = scoped
        .iter()
        .filter(|txn| txn.is_expense())
        .map(|txn| txn.amount)
        .sum();
    if month_income > 0.0 {
        let saved = month_income - month_expenses;
        let rate = saved / month_income * 100.0;
        if rate > HEALTHY_SAVINGS_RATE {
            insights.push(Insight::new(
                InsightKind::Success,
                format!("Great job! You're saving {rate:.1}% of your income"),
                Some(format!("${saved:.0} saved")),
            ));
        } else if rate < 0.0 {
            insights.push(Insight::new(
                InsightKind::Warning,
                "You're spending more than you earn this month",
                Some(format!("${:.0} overspent", -saved)),
            ));
        }
    }

    if insights.len() < MIN_INSIGHTS_BEFORE_PLACEHOLDER {
        insights.push(Insight::new(
            InsightKind::Info,
            "Set up monthly budgets to get more insights",
            None,
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{budget_comparison, category_breakdown};
    use crate::domain::{Budget, Category, MonthKey, TransactionDraft, TransactionKind};
    use uuid::Uuid;

    fn txn(amount: f64, kind: TransactionKind, category: Category, day: u32) -> Transaction {
        TransactionDraft::new(
            amount,
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            "Fixture entry",
            kind,
            category,
        )
        .into_transaction(Uuid::new_v4())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
    }

    fn march() -> MonthKey {
        MonthKey::new(2026, 3).unwrap()
    }

    fn run(transactions: &[Transaction], budgets: &[Budget]) -> Vec<Insight> {
        let breakdown = category_breakdown(transactions, today());
        let comparison = budget_comparison(transactions, budgets, today());
        generate_insights(transactions, &breakdown, &comparison, today())
    }

    #[test]
    fn exceeded_budget_warns_with_the_overage() {
        let transactions = vec![
            txn(2000.0, TransactionKind::Income, Category::Income, 1),
            txn(100.0, TransactionKind::Expense, Category::Food, 3),
        ];
        let budgets = vec![Budget::new(Category::Food, 80.0, march())];
        let insights = run(&transactions, &budgets);

        assert_eq!(insights[0].kind, InsightKind::Warning);
        insta::assert_snapshot!(
            insights[0].message,
            @"You've exceeded your Food budget by 25.0%"
        );
        assert_eq!(insights[0].value.as_deref(), Some("$20 over budget"));

        insta::assert_snapshot!(
            insights[1].message,
            @"Food is your highest expense category this month"
        );
        assert_eq!(insights[1].value.as_deref(), Some("$100 (100.0%)"));

        assert_eq!(insights[2].kind, InsightKind::Success);
        insta::assert_snapshot!(
            insights[2].message,
            @"Great job! You're saving 95.0% of your income"
        );
        assert_eq!(insights[2].value.as_deref(), Some("$1900 saved"));
    }

    #[test]
    fn approaching_budget_is_informational() {
        let transactions = vec![txn(90.0, TransactionKind::Expense, Category::Food, 3)];
        let budgets = vec![Budget::new(Category::Food, 100.0, march())];
        let insights = run(&transactions, &budgets);
        assert_eq!(insights[0].kind, InsightKind::Info);
        insta::assert_snapshot!(insights[0].message, @"You're at 90.0% of your Food budget");
        assert_eq!(insights[0].value.as_deref(), Some("$10 remaining"));
    }

    #[test]
    fn half_used_budget_stays_quiet() {
        let transactions = vec![txn(50.0, TransactionKind::Expense, Category::Food, 3)];
        let budgets = vec![Budget::new(Category::Food, 100.0, march())];
        let insights = run(&transactions, &budgets);
        assert!(insights
            .iter()
            .all(|insight| !insight.message.contains("budget by")));
        assert!(insights
            .iter()
            .all(|insight| !insight.message.contains("of your Food budget")));
    }

    #[test]
    fn overspending_warns_even_without_budgets() {
        let transactions = vec![
            txn(100.0, TransactionKind::Income, Category::Income, 1),
            txn(250.0, TransactionKind::Expense, Category::Shopping, 5),
        ];
        let insights = run(&transactions, &[]);
        let warning = insights
            .iter()
            .find(|insight| insight.kind == InsightKind::Warning)
            .unwrap();
        insta::assert_snapshot!(
            warning.message,
            @"You're spending more than you earn this month"
        );
        assert_eq!(warning.value.as_deref(), Some("$150 overspent"));
    }

    #[test]
    fn empty_month_prompts_budget_setup() {
        let insights = run(&[], &[]);
        assert_eq!(insights.len(), 1);
        insta::assert_snapshot!(
            insights[0].message,
            @"Set up monthly budgets to get more insights"
        );
        assert_eq!(insights[0].value, None);
    }

    #[test]
    fn the_list_never_exceeds_the_cap() {
        let mut transactions = vec![txn(10.0, TransactionKind::Income, Category::Income, 1)];
        let mut budgets = Vec::new();
        for category in [
            Category::Food,
            Category::Housing,
            Category::Shopping,
            Category::Travel,
            Category::Utilities,
            Category::Entertainment,
        ] {
            transactions.push(txn(120.0, TransactionKind::Expense, category, 5));
            budgets.push(Budget::new(category, 100.0, march()));
        }
        let insights = run(&transactions, &budgets);
        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert!(insights
            .iter()
            .all(|insight| insight.kind == InsightKind::Warning));
    }
}
