//! Error types for Bodycomp core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-friendly hints.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for Bodycomp operations.
pub type Result<T> = std::result::Result<T, BodyCompError>;

/// Core error type for Bodycomp operations.
#[derive(Debug, Error)]
pub enum BodyCompError {
    /// Measurement failed caller-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Another entry already owns the target date
    #[error("An entry for {date} already exists")]
    DateConflict { date: NaiveDate },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be parsed
    #[error("Corrupt entry store: {0}")]
    Corrupt(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for BodyCompError {
    fn from(err: std::io::Error) -> Self {
        BodyCompError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BodyCompError {
    fn from(err: serde_json::Error) -> Self {
        BodyCompError::Corrupt(err.to_string())
    }
}

impl From<csv::Error> for BodyCompError {
    fn from(err: csv::Error) -> Self {
        BodyCompError::Storage(format!("CSV write failed: {}", err))
    }
}
