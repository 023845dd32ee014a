//! Infrastructure adapters for odoo-scaffold.
//!
//! This crate implements the ports defined in
//! `odoo_scaffold_core::application::ports`. It contains all I/O and the
//! concrete Odoo module layout, plus [`generate`], the one-call entry point
//! for library users.

pub mod filesystem;
pub mod renderer;

use std::path::Path;

use odoo_scaffold_core::{
    application::{GenerateRequest, Report, ScaffoldService},
    domain::PlatformVersion,
    error::ScaffoldResult,
};

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::OdooRenderer;

/// Service wired with the production adapters.
pub fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(OdooRenderer::new()), Box::new(LocalFilesystem::new()))
}

/// Generate `output_path/<identifier>` with default manifest options.
///
/// ```no_run
/// use odoo_scaffold_adapters::generate;
/// use odoo_scaffold_core::domain::PlatformVersion;
///
/// let report = generate("library_management", "./addons", PlatformVersion::default())?;
/// println!("{} files", report.file_count());
/// # Ok::<(), odoo_scaffold_core::error::ScaffoldError>(())
/// ```
pub fn generate(
    identifier: &str,
    output_path: impl AsRef<Path>,
    platform_version: PlatformVersion,
) -> ScaffoldResult<Report> {
    let request = GenerateRequest::new(identifier, output_path.as_ref())
        .platform_version(platform_version);
    generate_with(&request)
}

/// Generate with full control over the request.
pub fn generate_with(request: &GenerateRequest) -> ScaffoldResult<Report> {
    local_service().generate(request)
}
