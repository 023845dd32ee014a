// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid module name '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("Invalid platform version: {0}")]
    InvalidPlatformVersion(String),

    // ========================================================================
    // Bundle Invariants (renderer bugs, never user input)
    // ========================================================================
    #[error("Bundle for '{module}' contains no artifacts")]
    EmptyBundle { module: String },

    #[error("Duplicate path in bundle: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Parent directory of '{path}' is not part of the bundle")]
    UndeclaredDirectory { path: String },

    #[error("Template '{template}' uses unknown placeholder '{placeholder}'")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { identifier, reason } => vec![
                format!("'{identifier}' cannot be used: {reason}"),
                "Use snake_case: letters, digits and underscores, starting with a letter".into(),
                "Examples: library_management, task_tracker, hr_extra2".into(),
            ],
            Self::InvalidPlatformVersion(value) => vec![
                format!("'{value}' is not an Odoo major version"),
                "Pass a whole number such as 16 or 17".into(),
            ],
            Self::EmptyBundle { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UndeclaredDirectory { .. }
            | Self::UnresolvedPlaceholder { .. } => vec![
                "The generated bundle is inconsistent".into(),
                "Please report this issue with the module name you used".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::InvalidPlatformVersion(_) => {
                ErrorCategory::Validation
            }
            Self::EmptyBundle { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UndeclaredDirectory { .. }
            | Self::UnresolvedPlaceholder { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
