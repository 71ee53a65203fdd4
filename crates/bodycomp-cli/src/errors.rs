//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else exits with 1.

use std::fmt;

use bodycomp_core::BodyCompError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, entry)
    NotFound { message: String, hint: String },

    /// Invalid user input, failed validation or a date conflict
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The entry store failed an integrity check
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput { message, hint } => match hint {
                Some(h) => write!(f, "{}\n{}", message, h),
                None => write!(f, "{}", message),
            },
            CliError::IntegrityFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

impl From<BodyCompError> for CliError {
    fn from(err: BodyCompError) -> Self {
        match err {
            BodyCompError::NotFound(what) => CliError::not_found(
                format!("Not found: {}", what),
                "Hint: Run `bodycomp list` to find entry IDs.",
            ),
            BodyCompError::DateConflict { date } => CliError::invalid_input_with_hint(
                format!("Failed to save: an entry for {} already exists", date),
                "Hint: Edit or delete the other entry first.",
            ),
            BodyCompError::Validation(message) | BodyCompError::InvalidInput(message) => {
                CliError::invalid_input(message)
            }
            BodyCompError::Corrupt(message) => CliError::IntegrityFailed(format!(
                "Entry store is corrupt: {}\nHint: Restore the file from a backup or run `bodycomp clear`.",
                message
            )),
            BodyCompError::Storage(message) => {
                CliError::IntegrityFailed(format!("Storage error: {}", message))
            }
        }
    }
}

/// Resolve the process exit code for an error returned by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<BodyCompError>() {
        Some(BodyCompError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(BodyCompError::DateConflict { .. })
        | Some(BodyCompError::Validation(_))
        | Some(BodyCompError::InvalidInput(_)) => exit_codes::INVALID_INPUT,
        Some(BodyCompError::Corrupt(_)) => exit_codes::INTEGRITY_FAILED,
        _ => exit_codes::GENERAL,
    }
}
