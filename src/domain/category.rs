use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FiscalError;

/// Fixed classification for income and spending. Declaration order is the
/// canonical ordering used for deterministic tie-breaks in reports.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Utilities,
    Healthcare,
    Education,
    Travel,
    Investments,
    Income,
    Other,
}

impl Category {
    /// Every category, in canonical order.
    pub const ALL: [Category; 12] = [
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::Investments,
        Category::Income,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Travel => "Travel",
            Category::Investments => "Investments",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }

    /// Display color for chart and badge rendering.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Housing => "#4B5563",
            Category::Food => "#EF4444",
            Category::Transportation => "#F59E0B",
            Category::Entertainment => "#8B5CF6",
            Category::Shopping => "#EC4899",
            Category::Utilities => "#3B82F6",
            Category::Healthcare => "#10B981",
            Category::Education => "#6366F1",
            Category::Travel => "#F97316",
            Category::Investments => "#14B8A6",
            Category::Income => "#85756E",
            Category::Other => "#9CA3AF",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FiscalError::Validation(format!("unknown category `{s}`")))
    }
}
