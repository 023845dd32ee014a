//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `odoo-scaffold-adapters`
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file creation
//!   - `BundleRenderer`: Turns derived names into module artifacts
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`ScaffoldService::generate`, used by the CLI and `adapters::generate`)

pub mod output;

pub use output::{BundleRenderer, Filesystem};
