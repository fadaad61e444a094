//! Core data models

pub mod entry;

pub use entry::{Entry, EntryInput};
