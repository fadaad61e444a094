//! CLI command for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::{DaybookError, DaybookResult};
use crate::export::export_entries_csv;
use crate::storage::RecordStore;

/// Handle the `export` command
pub fn handle_export(store: &RecordStore, output: PathBuf) -> DaybookResult<()> {
    if store.is_empty() {
        println!("No data available to export.");
        return Ok(());
    }

    let file = File::create(&output).map_err(|e| {
        DaybookError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export_entries_csv(store.entries(), &mut writer)?;
    println!("Entries exported to: {}", output.display());

    Ok(())
}
