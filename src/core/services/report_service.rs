use chrono::NaiveDate;

use crate::analytics::DashboardSnapshot;
use crate::store::{BudgetStore, TransactionStore};

use super::ServiceResult;

/// Bridges the stores to the aggregation engine. Every call refetches both
/// snapshots and recomputes; there is no caching layer to invalidate.
pub struct ReportService;

impl ReportService {
    pub fn dashboard(
        transactions: &dyn TransactionStore,
        budgets: &dyn BudgetStore,
        today: NaiveDate,
    ) -> ServiceResult<DashboardSnapshot> {
        let transactions = transactions.list()?;
        let budgets = budgets.list()?;
        Ok(DashboardSnapshot::build(&transactions, &budgets, today))
    }

    /// [`Self::dashboard`] anchored to the local calendar date.
    pub fn dashboard_today(
        transactions: &dyn TransactionStore,
        budgets: &dyn BudgetStore,
    ) -> ServiceResult<DashboardSnapshot> {
        Self::dashboard(transactions, budgets, chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Budget, Category, MonthKey, TransactionDraft, TransactionKind};
    use crate::store::MemoryStore;

    #[test]
    fn dashboard_reflects_whatever_is_stored_now() {
        let store = MemoryStore::new();
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();

        let empty = ReportService::dashboard(&store, &store, today).unwrap();
        assert_eq!(empty.balance, 0.0);
        assert!(empty.breakdown.is_empty());

        crate::store::TransactionStore::insert(
            &store,
            TransactionDraft::new(
                60.0,
                today,
                "Groceries",
                TransactionKind::Expense,
                Category::Food,
            ),
        )
        .unwrap();
        crate::store::BudgetStore::upsert(
            &store,
            Budget::new(Category::Food, 120.0, MonthKey::new(2026, 3).unwrap()),
        )
        .unwrap();

        let populated = ReportService::dashboard(&store, &store, today).unwrap();
        assert_eq!(populated.balance, -60.0);
        assert_eq!(populated.breakdown.len(), 1);
        assert_eq!(populated.comparison[0].percentage, 50.0);
    }
}
