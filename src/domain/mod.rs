//! Entity types shared by the stores and the aggregation engine.

pub mod budget;
pub mod category;
pub mod common;
pub mod month;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use common::{Displayable, Identifiable};
pub use month::{MonthKey, MonthOption};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
