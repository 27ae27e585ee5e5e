use chrono::NaiveDate;

use crate::domain::{MonthKey, Transaction};

/// Sum of every income amount across all history.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_income())
        .map(|txn| txn.amount)
        .sum()
}

/// Sum of every expense amount across all history.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.is_expense())
        .map(|txn| txn.amount)
        .sum()
}

/// Income minus expenses, never clamped; overspending shows as negative.
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expenses(transactions)
}

/// The `limit` most recent transactions by economic date, newest first.
/// Ties keep the slice's original order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// Transactions whose date falls in the calendar month containing `reference`.
pub fn current_month_transactions(
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<Transaction> {
    let month = MonthKey::from_date(reference);
    transactions
        .iter()
        .filter(|txn| month.contains(txn.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TransactionDraft, TransactionKind};
    use uuid::Uuid;

    fn txn(amount: f64, kind: TransactionKind, day: u32, description: &str) -> Transaction {
        let category = match kind {
            TransactionKind::Income => Category::Income,
            TransactionKind::Expense => Category::Food,
        };
        TransactionDraft::new(
            amount,
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            description,
            kind,
            category,
        )
        .into_transaction(Uuid::new_v4())
    }

    #[test]
    fn balance_is_income_minus_expenses() {
        let records = vec![
            txn(2000.0, TransactionKind::Income, 1, "Salary"),
            txn(300.0, TransactionKind::Expense, 2, "Groceries"),
            txn(50.0, TransactionKind::Expense, 3, "Takeaway"),
        ];
        assert_eq!(total_income(&records), 2000.0);
        assert_eq!(total_expenses(&records), 350.0);
        assert_eq!(balance(&records), 1650.0);
    }

    #[test]
    fn balance_goes_negative_when_overspending() {
        let records = vec![
            txn(100.0, TransactionKind::Income, 1, "Pocket money"),
            txn(250.0, TransactionKind::Expense, 2, "Repairs"),
        ];
        assert_eq!(balance(&records), -150.0);
    }

    #[test]
    fn recent_keeps_at_most_the_limit_newest_first() {
        let records: Vec<Transaction> = (1..=8)
            .map(|day| txn(10.0, TransactionKind::Expense, day, "Coffee run"))
            .collect();
        let recent = recent_transactions(&records, 5);
        assert_eq!(recent.len(), 5);
        let days: Vec<u32> = recent.iter().map(|t| chrono::Datelike::day(&t.date)).collect();
        assert_eq!(days, [8, 7, 6, 5, 4]);
    }

    #[test]
    fn current_month_excludes_neighbouring_months() {
        let mut records = vec![txn(10.0, TransactionKind::Expense, 15, "In scope")];
        let mut stray = txn(99.0, TransactionKind::Expense, 15, "Out of scope");
        stray.date = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        records.push(stray);
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let scoped = current_month_transactions(&records, today);
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].description, "In scope");
    }
}
