//! Terminal display formatting

pub mod entry;
pub mod report;

pub use entry::{format_entry_register, format_entry_row};
pub use report::format_monthly_summary;
