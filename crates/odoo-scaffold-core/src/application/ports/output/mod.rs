//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `odoo-scaffold-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Bundle, DerivedNames, ModuleOptions};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `odoo_scaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `odoo_scaffold_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths passed in are absolute or relative to the process working
/// directory; the service joins bundle paths onto the output root first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if a file or directory exists at path.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for bundle rendering.
///
/// Implemented by:
/// - `odoo_scaffold_adapters::renderer::OdooRenderer` (the built-in module layout)
///
/// Implementations must be pure: the same names and options always produce
/// byte-identical bundles, and every cross-file reference must come from
/// `names`.
pub trait BundleRenderer: Send + Sync {
    fn render(&self, names: &DerivedNames, options: &ModuleOptions) -> ScaffoldResult<Bundle>;
}
