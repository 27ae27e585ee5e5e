use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Category, Transaction};

use super::totals::current_month_transactions;

/// One category's share of the current month's spending.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    pub amount: f64,
    /// Share of the month's expense total, 0..=100.
    pub percentage: f64,
    pub color: &'static str,
}

/// Groups the current month's expenses by category, largest first. Returns
/// an empty list when the month has no expense volume, so a chart never
/// renders zero-width slices or divides by zero.
pub fn category_breakdown(transactions: &[Transaction], reference: NaiveDate) -> Vec<CategorySlice> {
    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();
    for txn in current_month_transactions(transactions, reference) {
        if txn.is_expense() {
            *by_category.entry(txn.category).or_insert(0.0) += txn.amount;
        }
    }

    let month_total: f64 = by_category.values().sum();
    if month_total <= 0.0 {
        return Vec::new();
    }

    let mut slices: Vec<CategorySlice> = by_category
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .map(|(category, amount)| CategorySlice {
            category,
            amount,
            percentage: amount / month_total * 100.0,
            color: category.color(),
        })
        .collect();
    // Stable sort on top of BTreeMap order: equal amounts stay in category order.
    slices.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    slices
}
