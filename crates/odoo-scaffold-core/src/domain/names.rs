//! Name derivation.
//!
//! [`DerivedNames`] is computed once per invocation from a [`ModuleName`] and
//! a [`PlatformVersion`], then handed by shared reference to every artifact
//! renderer. Any identifier that one artifact declares and another references
//! (groups, views, the window action, menus, the model reference) is produced
//! by a method here, so two artifacts cannot spell the same reference
//! differently.

use serde::Serialize;

use crate::domain::{
    dialect::VisibilityDialect,
    identifier::{ModuleName, PlatformVersion},
};

/// Every name the bundle uses, derived from one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    #[serde(skip)]
    module: ModuleName,
    /// `library_management` → `Library Management`.
    pub human_name: String,
    /// `library_management` → `library.management` (the Odoo `_name`).
    pub dotted_name: String,
    /// `library_management` → `LibraryManagement`.
    pub class_name: String,
    /// The identifier itself; namespace for every generated xml id.
    pub record_id_prefix: String,
    /// `model_library_management`, the `ir.model` xml id.
    pub model_reference_id: String,
    pub visibility_dialect: VisibilityDialect,
    pub platform_version: PlatformVersion,
}

impl DerivedNames {
    /// Derive all names. Total and pure.
    pub fn derive(module: &ModuleName, version: PlatformVersion) -> Self {
        let human_name = module
            .segments()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");
        let class_name: String = module.segments().map(capitalize).collect();
        let dotted_name = module.as_str().replace('_', ".");

        Self {
            human_name,
            class_name,
            model_reference_id: format!("model_{}", dotted_name.replace('.', "_")),
            dotted_name,
            record_id_prefix: module.as_str().to_string(),
            visibility_dialect: VisibilityDialect::for_version(version),
            platform_version: version,
            module: module.clone(),
        }
    }

    /// The identifier these names were derived from.
    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    // ── Shared references ─────────────────────────────────────────────────

    pub fn user_group_id(&self) -> String {
        format!("group_{}_user", self.record_id_prefix)
    }

    pub fn manager_group_id(&self) -> String {
        format!("group_{}_manager", self.record_id_prefix)
    }

    pub fn user_access_id(&self) -> String {
        format!("access_{}_user", self.record_id_prefix)
    }

    pub fn manager_access_id(&self) -> String {
        format!("access_{}_manager", self.record_id_prefix)
    }

    pub fn form_view_id(&self) -> String {
        format!("view_{}_form", self.record_id_prefix)
    }

    pub fn tree_view_id(&self) -> String {
        format!("view_{}_tree", self.record_id_prefix)
    }

    pub fn search_view_id(&self) -> String {
        format!("view_{}_search", self.record_id_prefix)
    }

    pub fn action_id(&self) -> String {
        format!("action_{}", self.record_id_prefix)
    }

    pub fn root_menu_id(&self) -> String {
        format!("menu_{}_root", self.record_id_prefix)
    }

    pub fn main_menu_id(&self) -> String {
        format!("menu_{}_main", self.record_id_prefix)
    }

    pub fn list_menu_id(&self) -> String {
        format!("menu_{}_list", self.record_id_prefix)
    }

    // ── File names ────────────────────────────────────────────────────────

    /// Python module holding the model, relative to `models/`.
    pub fn model_module(&self) -> &str {
        &self.record_id_prefix
    }

    pub fn model_file(&self) -> String {
        format!("models/{}.py", self.record_id_prefix)
    }

    pub fn views_file(&self) -> String {
        format!("views/{}_views.xml", self.record_id_prefix)
    }

    /// Manifest version string, e.g. `17.0.1.0.0`.
    pub fn manifest_version(&self) -> String {
        format!("{}.0.1.0.0", self.platform_version)
    }
}

/// ASCII title case: a letter after a non-letter is upper, others lower.
///
/// `sale2go` becomes `Sale2Go`. Identifiers are ASCII-only, so locale and
/// Unicode case rules do not apply.
fn title_case(segment: &str) -> String {
    let mut after_letter = false;
    segment
        .chars()
        .map(|c| {
            let out = if after_letter {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            };
            after_letter = c.is_ascii_alphabetic();
            out
        })
        .collect()
}

/// First character upper, the rest lower: `sale2go` becomes `Sale2go`.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
