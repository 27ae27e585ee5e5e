use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::common::Displayable;
use crate::domain::month::MonthKey;
use crate::errors::FiscalError;

/// Monthly spending ceiling for one category. Identity is the
/// (category, month) pair; writing an existing pair overwrites the amount
/// in place rather than producing a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: Category,
    pub amount: f64,
    pub month: MonthKey,
}

impl Budget {
    pub fn new(category: Category, amount: f64, month: MonthKey) -> Self {
        Self {
            category,
            amount,
            month,
        }
    }

    pub fn key(&self) -> (Category, MonthKey) {
        (self.category, self.month)
    }

    /// A zero ceiling is legal; it reports 0% consumption regardless of spend.
    pub fn validate(&self) -> Result<(), FiscalError> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(FiscalError::Validation(
                "budget amount must be zero or positive".into(),
            ));
        }
        Ok(())
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!("budget:{}/{} {:.2}", self.month, self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> MonthKey {
        MonthKey::new(2026, 3).unwrap()
    }

    #[test]
    fn display_label_names_the_key_and_amount() {
        let budget = Budget::new(Category::Food, 100.0, march());
        assert_eq!(budget.display_label(), "budget:2026-03/Food 100.00");
    }

    #[test]
    fn zero_amount_is_accepted() {
        assert!(Budget::new(Category::Food, 0.0, march()).validate().is_ok());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(Budget::new(Category::Food, -1.0, march())
            .validate()
            .is_err());
    }

    #[test]
    fn identity_is_the_category_month_pair() {
        let a = Budget::new(Category::Food, 100.0, march());
        let b = Budget::new(Category::Food, 250.0, march());
        assert_eq!(a.key(), b.key());
    }
}
