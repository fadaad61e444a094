//! CLI commands for entry management

use crate::display::{format_entry_register, format_monthly_summary};
use crate::error::{DaybookError, DaybookResult};
use crate::models::EntryInput;
use crate::reports::{monthly::current_month, MonthlyStats};
use crate::storage::RecordStore;

/// Handle the `add` command
pub fn handle_add(store: &mut RecordStore, input: EntryInput) -> DaybookResult<()> {
    let entry = store.insert(&input)?;
    println!(
        "Added entry for {}: income {}, expenses {}",
        entry.date, entry.income, entry.expenses
    );
    Ok(())
}

/// Handle the `list` command
///
/// Prints the register in date-descending order followed by the summary for
/// the current month. The printed row numbers are the positions accepted by
/// `remove` and `edit` until the next mutation.
pub fn handle_list(store: &RecordStore) -> DaybookResult<()> {
    let entries = store.all();
    print!("{}", format_entry_register(&entries));

    if !entries.is_empty() {
        let stats = MonthlyStats::current(&entries);
        println!();
        print!("{}", format_monthly_summary(&stats, current_month()));
    }

    Ok(())
}

/// Handle the `remove` command
pub fn handle_remove(store: &mut RecordStore, position: usize) -> DaybookResult<()> {
    let index = stored_index(store, position)?;
    let removed = store.remove_at(index)?;
    println!("Removed entry for {}", removed.date);
    Ok(())
}

/// Handle the `edit` command
///
/// Pops the entry (removing it from the store) and inserts the replacement
/// values. If the replacement is rejected the prior values are echoed so
/// they can be re-added by hand; the pop itself is not undone.
pub fn handle_edit(
    store: &mut RecordStore,
    position: usize,
    input: EntryInput,
) -> DaybookResult<()> {
    let index = stored_index(store, position)?;
    let previous = store.edit_at(index)?;

    match store.insert(&input) {
        Ok(entry) => {
            println!(
                "Updated entry for {}: income {}, expenses {}",
                entry.date, entry.income, entry.expenses
            );
            Ok(())
        }
        Err(err) => {
            eprintln!(
                "Replacement rejected; the previous entry was already removed. \
                 Prior values: {} income {} expenses {}",
                previous.date, previous.income, previous.expenses
            );
            Err(err)
        }
    }
}

/// Map a 1-based position in the displayed (date-descending) ordering to the
/// stored index the store operates on
///
/// Positions are computed from a snapshot and go stale after any mutation;
/// an out-of-range position is surfaced, never ignored.
fn stored_index(store: &RecordStore, position: usize) -> DaybookResult<usize> {
    let view = store.all();
    let entry = position
        .checked_sub(1)
        .and_then(|i| view.get(i))
        .ok_or_else(|| DaybookError::index_out_of_range(position, view.len()))?;

    store
        .position_of_date(entry.date)
        .ok_or_else(|| DaybookError::index_out_of_range(position, view.len()))
}
