//! Odoo Scaffold Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Odoo addon
//! module scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        odoo-scaffold-cli (CLI)          │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Renderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   odoo-scaffold-adapters (Infra)        │
//! │  (OdooRenderer, LocalFilesystem, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ModuleName, DerivedNames, Bundle)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use odoo_scaffold_core::application::{GenerateRequest, ScaffoldService};
//!
//! // Adapters come from odoo-scaffold-adapters.
//! let service = ScaffoldService::new(renderer, filesystem);
//! let request = GenerateRequest::new("library_management", "./addons").platform_version(PlatformVersion::new(17));
//! let report = service.generate(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateRequest, Report, ScaffoldService,
        ports::{BundleRenderer, Filesystem},
    };
    pub use crate::domain::{
        Bundle, DerivedNames, ModuleName, ModuleOptions, PlatformVersion, RenderContext,
        VisibilityDialect,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
