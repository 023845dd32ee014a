//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! "generate a module" use case.

pub mod report;
pub mod scaffold_service;

pub use report::Report;
pub use scaffold_service::{GenerateRequest, ScaffoldService};
