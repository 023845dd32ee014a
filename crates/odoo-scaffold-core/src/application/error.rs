//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming rules.
//! Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a bundle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The module directory is already present; nothing was written.
    #[error("Module directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// A filesystem operation failed part way through.
    ///
    /// `written` lists the files that were completely written before the
    /// failure, in write order, so the caller can decide how to clean up.
    #[error("Filesystem error at {path}: {reason}")]
    IoFailure {
        path: PathBuf,
        reason: String,
        written: Vec<PathBuf>,
    },

    /// A shared adapter lock was poisoned by a panicking thread.
    #[error("Adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Existing modules are never modified or merged".into(),
                "Choose a different module name or output path".into(),
            ],
            Self::IoFailure { path, written, .. } => {
                let mut out = vec![
                    format!("Failed to access: {}", path.display()),
                    "Check that you have write permissions".into(),
                ];
                if !written.is_empty() {
                    out.push(format!(
                        "{} file(s) were written before the failure and were left in place:",
                        written.len()
                    ));
                    out.extend(written.iter().map(|p| format!("  {}", p.display())));
                }
                out
            }
            Self::LockPoisoned => vec!["An adapter panicked earlier; retry the command".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::IoFailure { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
