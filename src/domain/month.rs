use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::FiscalError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month token, rendered as `YYYY-MM`. Budgets are keyed by it and
/// the "current period" of every report is the month containing today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, FiscalError> {
        if !(1..=12).contains(&month) {
            return Err(FiscalError::Validation(format!(
                "month must be 1-12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last calendar day of the month, leap years included.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Whether `date` falls inside this month, boundaries inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn prev(&self) -> MonthKey {
        if self.month == 1 {
            MonthKey {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> MonthKey {
        if self.month == 12 {
            MonthKey {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-readable form, e.g. "March 2026".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Previous, current, and following month relative to `reference`, the
    /// set offered by month pickers.
    pub fn options_around(reference: NaiveDate) -> Vec<MonthOption> {
        let current = MonthKey::from_date(reference);
        [current.prev(), current, current.next()]
            .into_iter()
            .map(|value| MonthOption {
                label: value.label(),
                value,
            })
            .collect()
    }
}

/// A selectable month with its display label.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthOption {
    pub value: MonthKey,
    pub label: String,
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = FiscalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || FiscalError::Validation(format!("invalid month token `{s}`, expected YYYY-MM"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_parses_the_token_form() {
        let key = MonthKey::new(2026, 3).unwrap();
        assert_eq!(key.to_string(), "2026-03");
        assert_eq!("2026-03".parse::<MonthKey>().unwrap(), key);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for raw in ["2026", "2026-13", "2026-0", "26-03", "2026-3", "next-month"] {
            assert!(raw.parse::<MonthKey>().is_err(), "`{raw}` should not parse");
        }
    }

    #[test]
    fn contains_is_inclusive_of_both_boundaries() {
        let key = MonthKey::new(2024, 2).unwrap();
        assert!(key.contains(key.first_day()));
        assert!(key.contains(key.last_day()));
        assert_eq!(key.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn prev_and_next_wrap_across_years() {
        let january = MonthKey::new(2026, 1).unwrap();
        assert_eq!(january.prev().to_string(), "2025-12");
        assert_eq!(MonthKey::new(2025, 12).unwrap().next(), january);
    }

    #[test]
    fn options_surround_the_reference_month() {
        let options = MonthKey::options_around(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        let values: Vec<String> = options.iter().map(|o| o.value.to_string()).collect();
        assert_eq!(values, ["2025-12", "2026-01", "2026-02"]);
        assert_eq!(options[1].label, "January 2026");
    }

    #[test]
    fn serde_round_trips_as_a_string() {
        let key = MonthKey::new(2026, 8).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2026-08\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
