//! Injected persistence seams for the two record collections. Callers pass a
//! store handle explicitly; nothing in the crate reaches for ambient state.
//!
//! The transaction and budget collections are independent: there is no
//! cross-referential integrity between them and no transactional guarantee
//! spanning both.

pub mod json_backend;
pub mod memory;

use uuid::Uuid;

use crate::domain::{Budget, Category, MonthKey, Transaction, TransactionDraft};
use crate::errors::FiscalError;

pub type Result<T> = std::result::Result<T, FiscalError>;

/// Persistence seam for transaction records. Implementations assign the
/// identifier at creation and return complete snapshots on `list`.
pub trait TransactionStore: Send + Sync {
    /// Full snapshot, newest economic date first (ties keep insertion order).
    fn list(&self) -> Result<Vec<Transaction>>;
    fn get(&self, id: Uuid) -> Result<Transaction>;
    fn insert(&self, draft: TransactionDraft) -> Result<Transaction>;
    /// Full replacement of every field except the identifier.
    fn update(&self, id: Uuid, draft: TransactionDraft) -> Result<Transaction>;
    fn delete(&self, id: Uuid) -> Result<()>;
}

/// Persistence seam for budget records keyed by (category, month).
pub trait BudgetStore: Send + Sync {
    fn list(&self) -> Result<Vec<Budget>>;
    fn get(&self, category: Category, month: MonthKey) -> Result<Option<Budget>>;
    /// Overwrites the amount in place when the key already exists.
    fn upsert(&self, budget: Budget) -> Result<Budget>;
    fn delete(&self, category: Category, month: MonthKey) -> Result<()>;
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
