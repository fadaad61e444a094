//! CSV export functionality
//!
//! Serializes the record collection as comma-separated rows with a fixed
//! header line. Every field is a date or an integer, so no quoting is needed.

use std::io::Write;

use crate::error::{DaybookError, DaybookResult};
use crate::models::Entry;

/// Export entries to CSV in stored collection order
///
/// The difference column is `income - expenses` from the stored fields,
/// matching the per-row display rule.
pub fn export_entries_csv<W: Write>(entries: &[Entry], writer: &mut W) -> DaybookResult<()> {
    writeln!(writer, "Date,Total Income,Total Expenses,Difference")
        .map_err(|e| DaybookError::Export(e.to_string()))?;

    for entry in entries {
        writeln!(
            writer,
            "{},{},{},{}",
            entry.date,
            entry.income,
            entry.expenses,
            entry.difference()
        )
        .map_err(|e| DaybookError::Export(e.to_string()))?;
    }

    Ok(())
}
