//! Monthly statistics
//!
//! Aggregates income, expenses, and average net for entries in a reference
//! calendar month. The filter matches on month-of-year only: entries from
//! different years that share the month number aggregate together. Stats are
//! recomputed on every query and never persisted.

use chrono::{Datelike, Local};

use crate::models::Entry;

/// Aggregate figures for one reference month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyStats {
    /// Sum of income over matching entries
    pub total_income: u64,

    /// Sum of expenses over matching entries
    pub total_expenses: u64,

    /// Number of matching entries
    pub entries_count: usize,

    /// `(total_income - total_expenses) / entries_count`, rounded to two
    /// decimal places; zero when no entries match
    pub average: f64,
}

impl MonthlyStats {
    /// Aggregate entries whose date falls in the given month (1-12)
    pub fn for_month(entries: &[Entry], month: u32) -> Self {
        let mut total_income: u64 = 0;
        let mut total_expenses: u64 = 0;
        let mut entries_count: usize = 0;

        for entry in entries {
            if entry.date.month() == month {
                // Individual amounts are capped at i64::MAX, but a month of
                // them can still exceed u64; saturate rather than wrap.
                total_income = total_income.saturating_add(entry.income);
                total_expenses = total_expenses.saturating_add(entry.expenses);
                entries_count += 1;
            }
        }

        let average = if entries_count > 0 {
            let net = total_income as i128 - total_expenses as i128;
            round2(net as f64 / entries_count as f64)
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            entries_count,
            average,
        }
    }

    /// Aggregate entries for the current month of the local clock
    pub fn current(entries: &[Entry]) -> Self {
        Self::for_month(entries, current_month())
    }

    /// Net total for the month
    ///
    /// Widened to `i128`: each total can be up to `u64::MAX`, so their
    /// difference does not fit an `i64`.
    pub fn net(&self) -> i128 {
        self.total_income as i128 - self.total_expenses as i128
    }
}

/// Month-of-year (1-12) of the local clock
pub fn current_month() -> u32 {
    Local::now().month()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, income: u64, expenses: u64) -> Entry {
        Entry::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            income,
            expenses,
        )
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let stats = MonthlyStats::for_month(&[], 1);
        assert_eq!(stats, MonthlyStats::default());
    }

    #[test]
    fn test_month_with_no_entries_is_all_zero() {
        let entries = vec![entry("2024-03-01", 100, 40)];
        let stats = MonthlyStats::for_month(&entries, 5);
        assert_eq!(stats.total_income, 0);
        assert_eq!(stats.total_expenses, 0);
        assert_eq!(stats.average, 0.0);
    }

    #[test]
    fn test_totals_and_average() {
        let entries = vec![
            entry("2024-05-03", 100, 40),
            entry("2024-05-20", 50, 10),
            entry("2024-06-01", 999, 999),
        ];
        let stats = MonthlyStats::for_month(&entries, 5);

        assert_eq!(stats.total_income, 150);
        assert_eq!(stats.total_expenses, 50);
        assert_eq!(stats.entries_count, 2);
        assert_eq!(stats.average, 50.0);
        assert_eq!(stats.net(), 100);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        // (10 - 0) / 3 = 3.333... -> 3.33
        let entries = vec![
            entry("2024-05-01", 4, 0),
            entry("2024-05-02", 3, 0),
            entry("2024-05-03", 3, 0),
        ];
        let stats = MonthlyStats::for_month(&entries, 5);
        assert_eq!(stats.average, 3.33);
    }

    #[test]
    fn test_negative_average() {
        let entries = vec![entry("2024-05-01", 10, 40)];
        let stats = MonthlyStats::for_month(&entries, 5);
        assert_eq!(stats.average, -30.0);
    }

    #[test]
    fn test_huge_monthly_totals_do_not_wrap() {
        let max = i64::MAX as u64;
        let entries = vec![
            entry("2024-05-01", max, 0),
            entry("2024-05-02", max, 0),
            entry("2024-05-03", max, 0),
        ];
        let stats = MonthlyStats::for_month(&entries, 5);

        // Three max-sized amounts exceed u64; the sum saturates
        assert_eq!(stats.total_income, u64::MAX);
        assert_eq!(stats.total_expenses, 0);
        assert_eq!(stats.net(), u64::MAX as i128);
        assert!(stats.average > 0.0);
    }

    #[test]
    fn test_month_filter_ignores_year() {
        let entries = vec![
            entry("2023-05-10", 100, 0),
            entry("2024-05-10", 200, 0),
            entry("2024-04-10", 999, 0),
        ];
        let stats = MonthlyStats::for_month(&entries, 5);

        // Same month from different years buckets together
        assert_eq!(stats.total_income, 300);
        assert_eq!(stats.entries_count, 2);
    }

    #[test]
    fn test_current_month_in_range() {
        let month = current_month();
        assert!((1..=12).contains(&month));
    }

    #[test]
    fn test_current_aggregates_todays_entries() {
        let today = Local::now().date_naive();
        let entries = vec![Entry::new(today, 10, 4)];

        let stats = MonthlyStats::current(&entries);
        assert_eq!(stats.entries_count, 1);
        assert_eq!(stats.total_income, 10);
        assert_eq!(stats.total_expenses, 4);
    }
}
