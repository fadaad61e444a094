//! Derived reports over the record collection

pub mod monthly;

pub use monthly::MonthlyStats;
