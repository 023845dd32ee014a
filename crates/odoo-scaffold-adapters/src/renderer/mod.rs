//! Odoo module renderer.
//!
//! Turns [`DerivedNames`] into the fixed set of module artifacts. Rendering
//! is pure: no I/O, no clock, no randomness, so equal inputs give
//! byte-identical bundles.

mod fragments;
mod templates;

use odoo_scaffold_core::{
    application::ports::BundleRenderer,
    domain::{Bundle, DerivedNames, ModuleOptions, RenderContext, State},
    error::ScaffoldResult,
};
use tracing::{debug, instrument};

use self::templates::{ACCESS_FILE, MENU_FILE, SECURITY_FILE};

/// Directory skeleton, relative to the module root, in creation order.
pub const DIRECTORIES: [&str; 5] = ["models", "views", "security", "data", "static/description"];

/// Renderer for the standard single-model Odoo addon.
#[derive(Debug, Clone, Copy, Default)]
pub struct OdooRenderer;

impl OdooRenderer {
    pub fn new() -> Self {
        Self
    }

    /// All placeholder values, computed once per bundle.
    fn context(names: &DerivedNames, options: &ModuleOptions) -> RenderContext {
        use self::fragments::python_str;

        RenderContext::new(names, options)
            // Manifest values are free text inside single-quoted literals.
            .with_variable("AUTHOR", python_str(&options.author))
            .with_variable("LICENSE", python_str(&options.license))
            .with_variable("CATEGORY", python_str(&options.category))
            .with_variable("WEBSITE", python_str(&options.website))
            .with_variable("SUMMARY", python_str(&options.summary))
            .with_variable("DEPENDS", fragments::depends(options))
            .with_variable("DATA_FILES", fragments::data_file_items(names))
            .with_variable("STATE_SELECTION", fragments::state_selection())
            .with_variable("INITIAL_STATE", State::INITIAL.as_str())
            .with_variable("TRANSITION_METHODS", fragments::transition_methods())
            .with_variable("HEADER_BUTTONS", fragments::header_buttons(names))
            .with_variable("STATUSBAR_VISIBLE", fragments::statusbar_visible())
            .with_variable("STATE_FILTERS", fragments::state_filters())
    }

    /// `(path, template)` pairs in write order.
    fn artifacts(names: &DerivedNames) -> Vec<(String, &'static str)> {
        vec![
            ("__manifest__.py".into(), templates::MANIFEST),
            ("__init__.py".into(), templates::ROOT_INIT),
            ("models/__init__.py".into(), templates::MODELS_INIT),
            (names.model_file(), templates::MODEL),
            (SECURITY_FILE.into(), templates::SECURITY),
            (ACCESS_FILE.into(), templates::ACCESS),
            (names.views_file(), templates::VIEWS),
            (MENU_FILE.into(), templates::MENU),
        ]
    }
}

impl BundleRenderer for OdooRenderer {
    #[instrument(
        skip_all,
        fields(module = %names.record_id_prefix, dialect = %names.visibility_dialect)
    )]
    fn render(&self, names: &DerivedNames, options: &ModuleOptions) -> ScaffoldResult<Bundle> {
        let ctx = Self::context(names, options);
        let mut bundle = Bundle::new(names.module().clone());

        for dir in DIRECTORIES {
            bundle.add_directory(dir)?;
        }

        for (path, template) in Self::artifacts(names) {
            let content = ctx.render(&path, template)?;
            debug!(path = %path, bytes = content.len(), "Rendered artifact");
            bundle.add_artifact(path, content)?;
        }

        Ok(bundle)
    }
}
