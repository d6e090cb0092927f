//! Application layer errors.
//!
//! These represent orchestration failures — a dialect nobody registered, an
//! output sink that refused the script. Legality violations inside a model
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No writer is registered for the requested dialect. A configuration
    /// problem on the caller's side, never retried.
    #[error("no writer registered for dialect '{id}'")]
    UnknownDialect { id: String, known: Vec<String> },

    /// The script sink rejected the rendered output.
    #[error("failed to write script at {path}: {reason}")]
    SinkFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownDialect { id, known } => vec![
                format!("'{id}' is not a registered dialect"),
                format!("Registered dialects: {}", known.join(", ")),
            ],
            Self::SinkFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDialect { .. } => ErrorCategory::Configuration,
            Self::SinkFailed { .. } => ErrorCategory::Internal,
        }
    }
}
