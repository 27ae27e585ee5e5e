use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::common::{Displayable, Identifiable};
use crate::errors::FiscalError;

pub const DESCRIPTION_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Direction of the money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single recorded income or expense. The identifier is assigned by the
/// store at creation and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} {} {:.2}", self.id, self.category, self.amount)
    }
}

/// Id-less payload used for creation and for full-replacement updates.
/// `validate` must pass before any store write is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
}

impl TransactionDraft {
    pub fn new(
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
        kind: TransactionKind,
        category: Category,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            kind,
            category,
        }
    }

    /// Checks amount, description length, and the kind/category pairing.
    /// Zero amounts are rejected; a zero amount is not a transaction.
    pub fn validate(&self) -> Result<(), FiscalError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(FiscalError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        let chars = self.description.trim().chars().count();
        if chars < DESCRIPTION_MIN_CHARS {
            return Err(FiscalError::Validation(format!(
                "description must be at least {DESCRIPTION_MIN_CHARS} characters"
            )));
        }
        if chars > DESCRIPTION_MAX_CHARS {
            return Err(FiscalError::Validation(format!(
                "description cannot exceed {DESCRIPTION_MAX_CHARS} characters"
            )));
        }
        match (self.kind, self.category) {
            (TransactionKind::Income, category) if category != Category::Income => {
                Err(FiscalError::Validation(
                    "income transactions must use the Income category".into(),
                ))
            }
            (TransactionKind::Expense, Category::Income) => Err(FiscalError::Validation(
                "expense transactions cannot use the Income category".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Materializes the draft with a store-assigned identifier.
    pub(crate) fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description.trim().to_string(),
            kind: self.kind,
            category: self.category,
        }
    }
}
