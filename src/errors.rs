use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Category, MonthKey};

/// Error type covering the failures the stores and services can surface.
#[derive(Debug, Error)]
pub enum FiscalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("No budget for {0} in {1}")]
    BudgetNotFound(Category, MonthKey),
}

pub type Result<T> = std::result::Result<T, FiscalError>;
