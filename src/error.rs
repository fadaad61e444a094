//! Custom error types for daybook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for daybook operations
#[derive(Error, Debug)]
pub enum DaybookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for entry input
    #[error("Validation error: {0}")]
    Validation(String),

    /// An entry for the given date already exists
    #[error("An entry for {date} already exists")]
    DuplicateDate { date: String },

    /// A positional index pointed outside the current collection
    #[error("Index {index} is out of range (collection has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DaybookError {
    /// Create a duplicate-date error
    pub fn duplicate_date(date: impl ToString) -> Self {
        Self::DuplicateDate {
            date: date.to_string(),
        }
    }

    /// Create an index-out-of-range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate-date error
    pub fn is_duplicate_date(&self) -> bool {
        matches!(self, Self::DuplicateDate { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DaybookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DaybookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for daybook operations
pub type DaybookResult<T> = Result<T, DaybookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DaybookError::Validation("income is required".into());
        assert_eq!(err.to_string(), "Validation error: income is required");
    }

    #[test]
    fn test_duplicate_date_error() {
        let err = DaybookError::duplicate_date("2024-01-05");
        assert_eq!(err.to_string(), "An entry for 2024-01-05 already exists");
        assert!(err.is_duplicate_date());
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = DaybookError::index_out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "Index 7 is out of range (collection has 3 entries)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let daybook_err: DaybookError = io_err.into();
        assert!(matches!(daybook_err, DaybookError::Io(_)));
    }
}
