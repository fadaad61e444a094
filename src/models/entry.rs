//! Entry model
//!
//! Represents one date-keyed income/expense record. The date is the natural
//! key: the store holds at most one entry per calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};

/// Largest amount accepted for income or expenses
///
/// Keeps `income - expenses` representable as an `i64` for any pair of
/// stored amounts.
pub const MAX_AMOUNT: u64 = i64::MAX as u64;

/// One financial record for a single calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry date (natural key, unique within the store)
    pub date: NaiveDate,

    /// Income for the day
    pub income: u64,

    /// Expenses for the day
    pub expenses: u64,
}

impl Entry {
    /// Create a new entry
    pub fn new(date: NaiveDate, income: u64, expenses: u64) -> Self {
        Self {
            date,
            income,
            expenses,
        }
    }

    /// Net difference for the day: income minus expenses
    ///
    /// Computed from the stored fields directly. Used for row display
    /// classification (negative vs non-negative) and the CSV difference
    /// column. Cannot wrap: validation caps both amounts at
    /// [`MAX_AMOUNT`].
    pub fn difference(&self) -> i64 {
        self.income as i64 - self.expenses as i64
    }

    /// Check if this day ran a deficit
    pub fn is_deficit(&self) -> bool {
        self.difference() < 0
    }
}

/// Raw user input for a new entry, as typed on the command line
///
/// All fields are strings; `parse` validates and converts them into a typed
/// [`Entry`].
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub date: String,
    pub income: String,
    pub expenses: String,
}

impl EntryInput {
    /// Create input from raw field values
    pub fn new(
        date: impl Into<String>,
        income: impl Into<String>,
        expenses: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            income: income.into(),
            expenses: expenses.into(),
        }
    }

    /// Validate and convert this input into an [`Entry`]
    ///
    /// All three fields must be non-empty after trimming. The date must be
    /// `YYYY-MM-DD`. Amounts parse with leading-integer semantics (see
    /// [`parse_amount`]); an amount with no leading digits or above
    /// [`MAX_AMOUNT`] is rejected.
    pub fn parse(&self) -> DaybookResult<Entry> {
        let date = self.date.trim();
        let income = self.income.trim();
        let expenses = self.expenses.trim();

        if date.is_empty() || income.is_empty() || expenses.is_empty() {
            return Err(DaybookError::Validation(
                "date, income, and expenses are all required".into(),
            ));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            DaybookError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", date))
        })?;

        let income = parse_amount(income)
            .ok_or_else(|| DaybookError::Validation(format!("Invalid income '{}'", income)))?;
        let expenses = parse_amount(expenses)
            .ok_or_else(|| DaybookError::Validation(format!("Invalid expenses '{}'", expenses)))?;

        for (field, amount) in [("Income", income), ("Expenses", expenses)] {
            if amount > MAX_AMOUNT {
                return Err(DaybookError::Validation(format!(
                    "{} {} exceeds the maximum of {}",
                    field, amount, MAX_AMOUNT
                )));
            }
        }

        Ok(Entry::new(date, income, expenses))
    }
}

/// Parse an amount string with leading-integer semantics
///
/// Takes the leading run of ASCII digits and ignores any trailing content,
/// so `"100.50"` parses as 100 and `"12abc"` as 12. Returns `None` when the
/// string does not start with a digit.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_difference() {
        let entry = Entry::new(date("2024-01-05"), 100, 40);
        assert_eq!(entry.difference(), 60);
        assert!(!entry.is_deficit());

        let entry = Entry::new(date("2024-01-06"), 30, 45);
        assert_eq!(entry.difference(), -15);
        assert!(entry.is_deficit());
    }

    #[test]
    fn test_parse_valid_input() {
        let input = EntryInput::new("2024-01-05", "100", "40");
        let entry = input.parse().unwrap();
        assert_eq!(entry.date, date("2024-01-05"));
        assert_eq!(entry.income, 100);
        assert_eq!(entry.expenses, 40);
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        let input = EntryInput::new("", "100", "40");
        assert!(input.parse().unwrap_err().is_validation());

        let input = EntryInput::new("2024-01-05", "  ", "40");
        assert!(input.parse().unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let input = EntryInput::new("05/01/2024", "100", "40");
        assert!(input.parse().unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        let input = EntryInput::new("2024-01-05", "abc", "40");
        assert!(input.parse().unwrap_err().is_validation());

        let input = EntryInput::new("2024-01-05", "100", "-5");
        assert!(input.parse().unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_rejects_amount_above_max() {
        let too_big = u64::MAX.to_string();

        let input = EntryInput::new("2024-01-05", &too_big, "0");
        assert!(input.parse().unwrap_err().is_validation());

        let input = EntryInput::new("2024-01-05", "0", &too_big);
        assert!(input.parse().unwrap_err().is_validation());
    }

    #[test]
    fn test_difference_at_amount_bounds_does_not_wrap() {
        let max = MAX_AMOUNT.to_string();

        let entry = EntryInput::new("2024-01-05", &max, "0").parse().unwrap();
        assert_eq!(entry.difference(), i64::MAX);
        assert!(!entry.is_deficit());

        let entry = EntryInput::new("2024-01-06", "0", &max).parse().unwrap();
        assert_eq!(entry.difference(), -i64::MAX);
        assert!(entry.is_deficit());
    }

    #[test]
    fn test_amount_leading_integer_semantics() {
        assert_eq!(parse_amount("100"), Some(100));
        assert_eq!(parse_amount("100.50"), Some(100));
        assert_eq!(parse_amount("12abc"), Some(12));
        assert_eq!(parse_amount(" 42 "), Some(42));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-5"), None);
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = Entry::new(date("2024-01-05"), 100, 40);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2024-01-05\""));

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
