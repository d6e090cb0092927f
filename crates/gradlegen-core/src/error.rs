//! Unified error handling for gradlegen core.
//!
//! Wraps domain and application errors behind one root type with rich
//! context and user-actionable suggestions, so callers handle a single
//! surface.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum GeneratorError {
    /// Errors from the domain layer (a dialect cannot express the model).
    #[error("Generation error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GeneratorError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in gradlegen".into(),
                "Please report this issue at: https://github.com/cosecruz/gradlegen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConstructKind;

    #[test]
    fn unknown_dialect_categorized_as_configuration() {
        let err = GeneratorError::Application(ApplicationError::UnknownDialect {
            id: "scala".into(),
            known: vec!["groovy".into(), "kotlin".into()],
        });
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("groovy")));
    }

    #[test]
    fn unsupported_construct_categorized_as_compatibility() {
        let err = GeneratorError::Domain(DomainError::UnsupportedConstruct {
            dialect: "kotlin".into(),
            construct: ConstructKind::BuildscriptExtProperty,
        });
        assert_eq!(err.category(), ErrorCategory::Compatibility);
    }
}
