//! Unified error handling for the scaffolder core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    /// Errors from the domain layer (invalid input, broken bundle invariants).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in odoo-scaffold".into(),
                "Please report this issue at: https://github.com/cosecruz/odoo-scaffold/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the target module directory was already present.
    ///
    /// Scripts that re-run generation can treat this as "already done";
    /// every other error needs a change of input or environment.
    pub fn is_already_done(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::AlreadyExists { .. })
        )
    }

    /// `true` when the identifier itself was rejected.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidIdentifier { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn collision_and_validation_are_distinguishable() {
        let exists: ScaffoldError = ApplicationError::AlreadyExists {
            path: PathBuf::from("/tmp/m"),
        }
        .into();
        let invalid: ScaffoldError = DomainError::InvalidIdentifier {
            identifier: "9bad".into(),
            reason: "starts with a digit".into(),
        }
        .into();

        assert!(exists.is_already_done());
        assert!(!exists.is_invalid_identifier());
        assert!(invalid.is_invalid_identifier());
        assert!(!invalid.is_already_done());
        assert_eq!(exists.category(), ErrorCategory::Conflict);
        assert_eq!(invalid.category(), ErrorCategory::Validation);
    }

    #[test]
    fn io_failure_suggestions_list_partial_writes() {
        let err: ScaffoldError = ApplicationError::IoFailure {
            path: PathBuf::from("/tmp/m/views/menu.xml"),
            reason: "permission denied".into(),
            written: vec![PathBuf::from("/tmp/m/__manifest__.py")],
        }
        .into();
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("__manifest__.py"))
        );
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
