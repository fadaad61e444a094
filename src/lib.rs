//! daybook - Date-keyed income/expense tracker for the terminal
//!
//! This library provides the core functionality for the daybook expense
//! tracker: one income/expense record per calendar date, persisted as a
//! single JSON blob, with derived monthly statistics and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data model (entries and entry input)
//! - `storage`: JSON file storage layer and the record store
//! - `reports`: Derived monthly statistics
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use daybook::config::DaybookPaths;
//! use daybook::storage::RecordStore;
//!
//! let paths = DaybookPaths::new()?;
//! let mut store = RecordStore::from_paths(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{DaybookError, DaybookResult};
