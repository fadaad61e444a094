//! CLI command for monthly statistics

use crate::display::format_monthly_summary;
use crate::error::DaybookResult;
use crate::reports::{monthly::current_month, MonthlyStats};
use crate::storage::RecordStore;

/// Handle the `stats` command
///
/// Uses the current month of the local clock unless a month (1-12) is given.
pub fn handle_stats(store: &RecordStore, month: Option<u32>) -> DaybookResult<()> {
    let (month, stats) = match month {
        Some(month) => (month, MonthlyStats::for_month(store.entries(), month)),
        None => (current_month(), MonthlyStats::current(store.entries())),
    };
    print!("{}", format_monthly_summary(&stats, month));
    Ok(())
}
