//! Entry display formatting
//!
//! Provides utilities for formatting entries for terminal display as a
//! numbered register. Dates render as `dd-mm-yy`; the position column is the
//! 1-based index accepted by `remove` and `edit`.

use crate::models::Entry;

/// Format a single entry for display (register row)
pub fn format_entry_row(position: usize, entry: &Entry) -> String {
    let marker = if entry.is_deficit() { "-" } else { " " };

    format!(
        "{:>3} {} {:>10} {:>10} {}{:>9}",
        position,
        entry.date.format("%d-%m-%y"),
        entry.income,
        entry.expenses,
        marker,
        entry.difference()
    )
}

/// Format a list of entries as a register
///
/// Rows are printed in the order given; callers pass the date-descending
/// snapshot so the newest entry comes first.
pub fn format_entry_register(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No data available\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3} {:8} {:>10} {:>10} {:>10}\n",
        "#", "Date", "Income", "Expenses", "Difference"
    ));
    output.push_str(&"-".repeat(46));
    output.push('\n');

    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format_entry_row(i + 1, entry));
        output.push('\n');
    }

    output
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
    fn test_empty_register() {
        assert_eq!(format_entry_register(&[]), "No data available\n");
    }

    #[test]
    fn test_row_formats_date_as_dd_mm_yy() {
        let row = format_entry_row(1, &entry("2024-01-05", 100, 40));
        assert!(row.contains("05-01-24"));
        assert!(row.contains("60"));
    }

    #[test]
    fn test_deficit_row_is_marked() {
        let row = format_entry_row(1, &entry("2024-01-05", 30, 45));
        assert!(row.contains("-15"));
    }

    #[test]
    fn test_register_numbers_rows_from_one() {
        let entries = vec![entry("2024-01-06", 1, 0), entry("2024-01-05", 2, 0)];
        let register = format_entry_register(&entries);

        let lines: Vec<&str> = register.lines().collect();
        assert!(lines[0].contains("Date"));
        assert!(lines[2].trim_start().starts_with('1'));
        assert!(lines[3].trim_start().starts_with('2'));
    }
}
