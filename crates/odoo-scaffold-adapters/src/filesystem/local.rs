//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use odoo_scaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// The service fills in `written`; a single call never has partial output.
fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ApplicationError::IoFailure {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
        written: Vec::new(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("m/static/description");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("index.html"), "<p/>").unwrap();

        assert!(fs.exists(&dir));
        assert_eq!(std::fs::read_to_string(dir.join("index.html")).unwrap(), "<p/>");
    }

    #[test]
    fn write_into_missing_directory_is_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing/file.py");

        let err = LocalFilesystem::new().write_file(&path, "").unwrap_err();
        match err {
            ScaffoldError::Application(ApplicationError::IoFailure { path: p, written, .. }) => {
                assert_eq!(p, path);
                assert!(written.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
