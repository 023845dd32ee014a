//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the identifier
//! 2. Derive names (once)
//! 3. Render the bundle
//! 4. Materialize it on the filesystem
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, Report,
        ports::{BundleRenderer, Filesystem},
    },
    domain::{
        Bundle, DerivedNames, DomainValidator as validator, ModuleName, ModuleOptions,
        PlatformVersion,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Input of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub identifier: String,
    pub output_path: PathBuf,
    pub platform_version: PlatformVersion,
    pub options: ModuleOptions,
}

impl GenerateRequest {
    /// Request with the default platform version and manifest options.
    pub fn new(identifier: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            output_path: output_path.into(),
            platform_version: PlatformVersion::default(),
            options: ModuleOptions::default(),
        }
    }

    pub fn platform_version(mut self, version: PlatformVersion) -> Self {
        self.platform_version = version;
        self
    }

    pub fn options(mut self, options: ModuleOptions) -> Self {
        self.options = options;
        self
    }
}

/// Main scaffolding service.
///
/// Orchestrates validation, derivation, rendering and writing.
pub struct ScaffoldService {
    renderer: Box<dyn BundleRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ScaffoldService::new(
    ///     Box::new(OdooRenderer::new()),  // impl BundleRenderer
    ///     Box::new(LocalFilesystem::new()), // impl Filesystem
    /// );
    /// ```
    pub fn new(renderer: Box<dyn BundleRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate a new module.
    ///
    /// An invalid identifier is rejected before the filesystem is touched.
    #[instrument(
        skip_all,
        fields(
            module = %request.identifier,
            version = %request.platform_version,
            output_path = %request.output_path.display()
        )
    )]
    pub fn generate(&self, request: &GenerateRequest) -> ScaffoldResult<Report> {
        let (names, bundle) = self.preview(request)?;
        self.materialize(&request.output_path, &names, &bundle)
    }

    /// Validate, derive and render without writing anything.
    pub fn preview(&self, request: &GenerateRequest) -> ScaffoldResult<(DerivedNames, Bundle)> {
        // 1. Validate identifier
        validator::validate_identifier(&request.identifier).map_err(ScaffoldError::Domain)?;
        let module = ModuleName::parse(request.identifier.as_str())?;

        // 2. Derive names; the dialect is fixed from here on
        let names = DerivedNames::derive(&module, request.platform_version);
        info!(
            model = %names.dotted_name,
            dialect = %names.visibility_dialect,
            "Names derived"
        );

        // 3. Render bundle
        let bundle = self.renderer.render(&names, &request.options)?;
        validator::validate_bundle(&bundle).map_err(ScaffoldError::Domain)?;
        debug!(
            files = bundle.artifacts().len(),
            directories = bundle.directories().len(),
            "Bundle rendered"
        );

        Ok((names, bundle))
    }

    /// Write a rendered bundle under `root/<module>`.
    ///
    /// Fails with `AlreadyExists`, without writing, if the module directory is
    /// present. Directories are all created before the first file is written.
    pub fn materialize(
        &self,
        root: &Path,
        names: &DerivedNames,
        bundle: &Bundle,
    ) -> ScaffoldResult<Report> {
        validator::validate_bundle(bundle).map_err(ScaffoldError::Domain)?;

        if bundle.module() != names.module() {
            return Err(ScaffoldError::Internal {
                message: format!(
                    "bundle for '{}' materialized with names of '{}'",
                    bundle.module(),
                    names.module()
                ),
            });
        }

        let module_dir = root.join(names.module().as_str());

        // Check if module exists
        if self.filesystem.exists(&module_dir) {
            warn!(path = %module_dir.display(), "Module directory already exists");
            return Err(ApplicationError::AlreadyExists { path: module_dir }.into());
        }

        let mut report = Report::new(names, &module_dir);

        // Directory skeleton first; no file exists yet if this fails.
        self.filesystem.create_dir_all(&module_dir)?;
        report.directories.push(module_dir.clone());
        for dir in bundle.directories() {
            let path = dir.under(&module_dir);
            self.filesystem.create_dir_all(&path)?;
            report.directories.push(path);
        }

        // Then every artifact, keeping track of what landed.
        for artifact in bundle.artifacts() {
            let path = artifact.relative_path.under(&module_dir);
            if let Err(e) = self.filesystem.write_file(&path, &artifact.content) {
                warn!(
                    error = %e,
                    path = %path.display(),
                    written = report.files.len(),
                    "Write failed; leaving partial module in place"
                );
                return Err(ApplicationError::IoFailure {
                    path,
                    reason: e.to_string(),
                    written: report.files,
                }
                .into());
            }
            debug!(path = %path.display(), bytes = artifact.size(), "Wrote artifact");
            report.files.push(path);
        }

        info!(
            files = report.file_count(),
            path = %module_dir.display(),
            "Module generated"
        );
        Ok(report)
    }
}
