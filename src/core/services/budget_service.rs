use crate::domain::{Budget, Category, Displayable, MonthKey};
use crate::store::BudgetStore;

use super::ServiceResult;

/// Budget upkeep keyed by (category, month).
pub struct BudgetService;

impl BudgetService {
    /// Validates and stores the budget, overwriting any amount already set
    /// for the same category and month.
    pub fn set(store: &dyn BudgetStore, budget: Budget) -> ServiceResult<Budget> {
        budget.validate()?;
        let stored = store.upsert(budget)?;
        tracing::info!(budget = %stored.display_label(), "budget set");
        Ok(stored)
    }

    pub fn remove(store: &dyn BudgetStore, category: Category, month: MonthKey) -> ServiceResult<()> {
        store.delete(category, month)?;
        tracing::info!(%category, %month, "budget removed");
        Ok(())
    }

    pub fn list(store: &dyn BudgetStore) -> ServiceResult<Vec<Budget>> {
        Ok(store.list()?)
    }

    pub fn get(
        store: &dyn BudgetStore,
        category: Category,
        month: MonthKey,
    ) -> ServiceResult<Option<Budget>> {
        Ok(store.get(category, month)?)
    }

    /// Every budget set for the given month.
    pub fn for_month(store: &dyn BudgetStore, month: MonthKey) -> ServiceResult<Vec<Budget>> {
        let mut budgets = store.list()?;
        budgets.retain(|budget| budget.month == month);
        Ok(budgets)
    }
}
