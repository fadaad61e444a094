//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the record store.

pub mod entry;
pub mod export;
pub mod report;

pub use entry::{handle_add, handle_edit, handle_list, handle_remove};
pub use export::handle_export;
pub use report::handle_stats;
