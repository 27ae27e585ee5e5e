use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::{Budget, Category, Identifiable, MonthKey, Transaction, TransactionDraft};
use crate::errors::FiscalError;

use super::{BudgetStore, Result, TransactionStore};

/// Volatile store backing tests and the embedded default. Holds both
/// collections so one handle can serve both seams.
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Mutex<Vec<Transaction>>,
    budgets: Mutex<Vec<Budget>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store for fixtures.
    pub fn with_records(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions: Mutex::new(transactions),
            budgets: Mutex::new(budgets),
        }
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> Result<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| FiscalError::Storage(format!("{what} collection is poisoned")))
}

fn index_of<T: Identifiable>(records: &[T], id: Uuid) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

impl TransactionStore for MemoryStore {
    fn list(&self) -> Result<Vec<Transaction>> {
        let mut snapshot = lock(&self.transactions, "transaction")?.clone();
        // Stable sort: equal dates keep insertion order.
        snapshot.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(snapshot)
    }

    fn get(&self, id: Uuid) -> Result<Transaction> {
        let records = lock(&self.transactions, "transaction")?;
        let position = index_of(&records, id).ok_or(FiscalError::TransactionNotFound(id))?;
        Ok(records[position].clone())
    }

    fn insert(&self, draft: TransactionDraft) -> Result<Transaction> {
        let stored = draft.into_transaction(Uuid::new_v4());
        lock(&self.transactions, "transaction")?.push(stored.clone());
        tracing::debug!(id = %stored.id, "transaction inserted");
        Ok(stored)
    }

    fn update(&self, id: Uuid, draft: TransactionDraft) -> Result<Transaction> {
        let mut records = lock(&self.transactions, "transaction")?;
        let position = index_of(&records, id).ok_or(FiscalError::TransactionNotFound(id))?;
        records[position] = draft.into_transaction(id);
        Ok(records[position].clone())
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut records = lock(&self.transactions, "transaction")?;
        let position = index_of(&records, id).ok_or(FiscalError::TransactionNotFound(id))?;
        records.remove(position);
        tracing::debug!(%id, "transaction deleted");
        Ok(())
    }
}

impl BudgetStore for MemoryStore {
    fn list(&self) -> Result<Vec<Budget>> {
        Ok(lock(&self.budgets, "budget")?.clone())
    }

    fn get(&self, category: Category, month: MonthKey) -> Result<Option<Budget>> {
        Ok(lock(&self.budgets, "budget")?
            .iter()
            .find(|budget| budget.key() == (category, month))
            .cloned())
    }

    fn upsert(&self, budget: Budget) -> Result<Budget> {
        let mut records = lock(&self.budgets, "budget")?;
        match records.iter_mut().find(|b| b.key() == budget.key()) {
            Some(slot) => *slot = budget.clone(),
            None => records.push(budget.clone()),
        }
        tracing::debug!(category = %budget.category, month = %budget.month, "budget upserted");
        Ok(budget)
    }

    fn delete(&self, category: Category, month: MonthKey) -> Result<()> {
        let mut records = lock(&self.budgets, "budget")?;
        let before = records.len();
        records.retain(|budget| budget.key() != (category, month));
        if records.len() == before {
            return Err(FiscalError::BudgetNotFound(category, month));
        }
        Ok(())
    }
}
