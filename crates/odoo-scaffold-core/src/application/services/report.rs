//! Result of a successful generation run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{DerivedNames, PlatformVersion, VisibilityDialect};

/// Everything a caller needs to display or verify a generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub module: String,
    pub module_dir: PathBuf,
    pub model_name: String,
    pub platform_version: PlatformVersion,
    pub dialect: VisibilityDialect,
    /// Directories created, module root first.
    pub directories: Vec<PathBuf>,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

impl Report {
    pub(crate) fn new(names: &DerivedNames, module_dir: &Path) -> Self {
        Self {
            module: names.record_id_prefix.clone(),
            module_dir: module_dir.to_path_buf(),
            model_name: names.dotted_name.clone(),
            platform_version: names.platform_version,
            dialect: names.visibility_dialect,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Written files relative to the module directory, sorted.
    pub fn relative_files(&self) -> Vec<PathBuf> {
        let mut out: Vec<PathBuf> = self
            .files
            .iter()
            .map(|p| p.strip_prefix(&self.module_dir).unwrap_or(p).to_path_buf())
            .collect();
        out.sort();
        out
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
