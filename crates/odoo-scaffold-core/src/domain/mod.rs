// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the Odoo module scaffolder.
//!
//! This module contains pure logic with ZERO I/O. Writing files is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: `DerivedNames` is computed once and shared by reference
//!
//! ## Flow
//!
//! ```text
//! raw &str ──validate──▶ ModuleName ──derive──▶ DerivedNames ──render──▶ Bundle
//!                                   ▲
//!               PlatformVersion ────┘ (picks the VisibilityDialect once)
//! ```

// Public API - what the world sees
pub mod dialect;
pub mod entities;
pub mod error;
pub mod identifier;
pub mod lifecycle;
pub mod names;
pub mod options;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use dialect::{Operator, Predicate, VisibilityDialect};
pub use entities::{
    bundle::{Artifact, Bundle},
    common::RelativePath,
    render_context::RenderContext,
};
pub use error::{DomainError, ErrorCategory};
pub use identifier::{ModuleName, PlatformVersion, validate};
pub use lifecycle::{STATE_FIELD, State, Transition};
pub use names::DerivedNames;
pub use options::{ModuleOptions, REQUIRED_DEPENDS};
pub use validation::DomainValidator;
