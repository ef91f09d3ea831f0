//! Custom error types for spendwatch
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// A single-entry validation failure, identifying the field that failed.
///
/// Returned by the entry validator instead of letting bad input (empty store,
/// unparsable amount) leak into aggregation as garbage values. Callers decide
/// whether to skip the entry, abort a batch, or prompt the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Store name is empty after trimming
    #[error("store name must not be empty")]
    EmptyStore,

    /// Amount did not parse as a non-negative decimal
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Date did not parse as a calendar date
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// The main error type for spendwatch operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for a single spend entry
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// CSV import rejected wholesale because of its header row
    #[error("Invalid CSV format: expected headers {expected}, found '{found}'")]
    ImportFormat {
        expected: &'static str,
        found: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an import-format rejection
    pub fn is_import_format(&self) -> bool {
        matches!(self, Self::ImportFormat { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendwatch operations
pub type SpendResult<T> = Result<T, SpendError>;
