//! Application layer for the scaffolder.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateRequest, Report, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{BundleRenderer, Filesystem};

pub use error::ApplicationError;
