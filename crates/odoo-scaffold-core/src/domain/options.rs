//! Free-form manifest values passed through to the templates unchanged.

use serde::{Deserialize, Serialize};

/// Modules every generated bundle depends on: the model inherits
/// `mail.thread`.
pub const REQUIRED_DEPENDS: [&str; 2] = ["base", "mail"];

/// Manifest fields the caller may override.
///
/// None of these participate in cross-file references; they are copied into
/// `__manifest__.py` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleOptions {
    pub author: String,
    pub license: String,
    pub category: String,
    pub website: String,
    pub summary: String,
    /// Modules added to `depends` after `base` and `mail`.
    pub extra_depends: Vec<String>,
    pub application: bool,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            author: "TODO: Author Name".into(),
            license: "LGPL-3".into(),
            category: "Uncategorized".into(),
            website: String::new(),
            summary: "TODO: Short module summary".into(),
            extra_depends: Vec::new(),
            application: true,
        }
    }
}

impl ModuleOptions {
    /// `depends` entries in manifest order, without duplicates.
    pub fn depends(&self) -> Vec<&str> {
        let mut out: Vec<&str> = REQUIRED_DEPENDS.to_vec();
        for extra in &self.extra_depends {
            if !out.contains(&extra.as_str()) {
                out.push(extra);
            }
        }
        out
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
