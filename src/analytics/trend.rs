use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{MonthKey, Transaction};

/// One month's income and expense volume.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyFlow {
    pub month: MonthKey,
    pub income: f64,
    pub expense: f64,
}

/// Income and expense totals for the `months` calendar months ending at the
/// month containing `reference`, oldest first. Months without activity still
/// appear with zeros so a chart keeps a continuous axis.
pub fn monthly_trend(
    transactions: &[Transaction],
    months: usize,
    reference: NaiveDate,
) -> Vec<MonthlyFlow> {
    let mut keys = Vec::with_capacity(months);
    let mut cursor = MonthKey::from_date(reference);
    for _ in 0..months {
        keys.push(cursor);
        cursor = cursor.prev();
    }
    keys.reverse();

    keys.into_iter()
        .map(|month| {
            let mut flow = MonthlyFlow {
                month,
                income: 0.0,
                expense: 0.0,
            };
            for txn in transactions.iter().filter(|txn| month.contains(txn.date)) {
                if txn.is_income() {
                    flow.income += txn.amount;
                } else {
                    flow.expense += txn.amount;
                }
            }
            flow
        })
        .collect()
}
