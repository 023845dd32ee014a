use std::collections::HashSet;

use crate::domain::{ModuleName, entities::common::RelativePath, error::DomainError};

/// A rendered module ready for materialization.
///
/// This is the output of the bundle renderer. It contains no business logic,
/// only data: the directories that must exist and the files to write, both
/// relative to the module directory and both in the order they are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub(crate) module: ModuleName,
    pub(crate) directories: Vec<RelativePath>,
    pub(crate) artifacts: Vec<Artifact>,
}

impl Bundle {
    pub fn new(module: ModuleName) -> Self {
        Self {
            module,
            directories: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<std::path::PathBuf>) -> Result<(), DomainError> {
        self.directories.push(RelativePath::try_new(path)?);
        Ok(())
    }

    pub fn add_artifact(
        &mut self,
        path: impl Into<std::path::PathBuf>,
        content: String,
    ) -> Result<(), DomainError> {
        self.artifacts.push(Artifact {
            relative_path: RelativePath::try_new(path)?,
            content,
        });
        Ok(())
    }

    pub fn with_directory(mut self, path: impl Into<std::path::PathBuf>) -> Result<Self, DomainError> {
        self.add_directory(path)?;
        Ok(self)
    }

    pub fn with_artifact(
        mut self,
        path: impl Into<std::path::PathBuf>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.add_artifact(path, content.into())?;
        Ok(self)
    }

    /// Check structural invariants.
    ///
    /// - at least one artifact
    /// - no path appears twice (as file or directory)
    /// - every artifact's parent directory is part of the skeleton
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.artifacts.is_empty() {
            return Err(DomainError::EmptyBundle {
                module: self.module.to_string(),
            });
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .chain(self.artifacts.iter().map(|a| &a.relative_path));
        for path in paths {
            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        for artifact in &self.artifacts {
            let parent = artifact.relative_path.as_path().parent();
            let covered = match parent {
                None => true,
                Some(p) if p.as_os_str().is_empty() => true,
                Some(p) => self.directories.iter().any(|d| d.as_path() == p),
            };
            if !covered {
                return Err(DomainError::UndeclaredDirectory {
                    path: artifact.relative_path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    /// Look up an artifact by its path relative to the module root.
    pub fn artifact(&self, path: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.relative_path.as_path() == std::path::Path::new(path))
    }
}

/// One text file of the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub relative_path: RelativePath,
    pub content: String,
}

impl Artifact {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
