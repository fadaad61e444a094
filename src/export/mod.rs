//! Data export

pub mod csv;

pub use csv::export_entries_csv;
