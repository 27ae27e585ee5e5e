//! Stateless operations over injected stores. Services validate, delegate,
//! and log; they hold no state of their own.

pub mod budget_service;
pub mod report_service;
pub mod seed_service;
pub mod transaction_service;

use thiserror::Error;

use crate::errors::FiscalError;

pub use budget_service::BudgetService;
pub use report_service::ReportService;
pub use seed_service::{SeedReport, SeedService};
pub use transaction_service::TransactionService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] FiscalError),
    #[error("{0}")]
    Invalid(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
