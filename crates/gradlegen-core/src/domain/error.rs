//! Domain errors: a model asked a dialect for something it cannot express.

use std::fmt;

use thiserror::Error;

/// The construct kinds a dialect may refuse to express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    /// A `buildscript` classpath dependency.
    BuildscriptDependency,
    /// A `buildscript` ext property.
    BuildscriptExtProperty,
    /// A plugin applied via the legacy `apply plugin:` mechanism.
    AppliedPlugin,
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BuildscriptDependency => "a buildscript dependency",
            Self::BuildscriptExtProperty => "a buildscript ext property",
            Self::AppliedPlugin => "the apply-plugin mechanism",
        };
        f.write_str(label)
    }
}

/// Write-time legality violations.
///
/// These are fatal: generation aborts before any output is produced, and the
/// caller must change the model or pick a different dialect.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("the {dialect} dialect cannot express {construct}")]
    UnsupportedConstruct {
        dialect: String,
        construct: ConstructKind,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedConstruct { dialect, construct } => vec![
                format!("The {dialect} build-script dialect has no syntax for {construct}"),
                "Remove the construct from the build model".into(),
                "Or generate for a dialect that supports it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedConstruct { .. } => ErrorCategory::Compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
