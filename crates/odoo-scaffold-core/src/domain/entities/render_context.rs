use std::collections::BTreeMap;

use crate::domain::{DerivedNames, ModuleOptions, error::DomainError};

/// Context for template rendering.
///
/// A **Value Object** holding every placeholder value a template may use.
/// Built once from [`DerivedNames`] and [`ModuleOptions`]; renderers add the
/// generated fragments (header buttons, depends list) with
/// [`RenderContext::with_variable`] and never format shared names themselves.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `MODULE` | `library_management` |
/// | `HUMAN_NAME` | `Library Management` |
/// | `HUMAN_NAME_LOWER` | `library management` |
/// | `HUMAN_NAME_UNDERLINE` | `==================` |
/// | `MODEL_NAME` | `library.management` |
/// | `CLASS_NAME` | `LibraryManagement` |
/// | `MODEL_REF` | `model_library_management` |
/// | `USER_GROUP` / `MANAGER_GROUP` | `group_library_management_user` |
/// | `USER_ACCESS` / `MANAGER_ACCESS` | `access_library_management_user` |
/// | `FORM_VIEW` / `TREE_VIEW` / `SEARCH_VIEW` | `view_library_management_form` |
/// | `ACTION` | `action_library_management` |
/// | `ROOT_MENU` / `MAIN_MENU` / `LIST_MENU` | `menu_library_management_root` |
/// | `VIEWS_FILE` | `views/library_management_views.xml` |
/// | `VERSION` | `17.0.1.0.0` |
/// | `AUTHOR`, `LICENSE`, `CATEGORY`, `WEBSITE`, `SUMMARY` | manifest pass-through |
#[derive(Debug, Clone)]
pub struct RenderContext {
    // BTreeMap keeps iteration, and therefore error reporting, deterministic.
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(names: &DerivedNames, options: &ModuleOptions) -> Self {
        let mut vars = BTreeMap::new();

        vars.insert("MODULE", names.record_id_prefix.clone());
        vars.insert("HUMAN_NAME", names.human_name.clone());
        vars.insert("HUMAN_NAME_LOWER", names.human_name.to_ascii_lowercase());
        vars.insert("HUMAN_NAME_UNDERLINE", "=".repeat(names.human_name.len()));
        vars.insert("MODEL_NAME", names.dotted_name.clone());
        vars.insert("CLASS_NAME", names.class_name.clone());
        vars.insert("MODEL_REF", names.model_reference_id.clone());
        vars.insert("MODEL_MODULE", names.model_module().to_string());

        vars.insert("USER_GROUP", names.user_group_id());
        vars.insert("MANAGER_GROUP", names.manager_group_id());
        vars.insert("USER_ACCESS", names.user_access_id());
        vars.insert("MANAGER_ACCESS", names.manager_access_id());
        vars.insert("FORM_VIEW", names.form_view_id());
        vars.insert("TREE_VIEW", names.tree_view_id());
        vars.insert("SEARCH_VIEW", names.search_view_id());
        vars.insert("ACTION", names.action_id());
        vars.insert("ROOT_MENU", names.root_menu_id());
        vars.insert("MAIN_MENU", names.main_menu_id());
        vars.insert("LIST_MENU", names.list_menu_id());
        vars.insert("VIEWS_FILE", names.views_file());
        vars.insert("VERSION", names.manifest_version());

        vars.insert("AUTHOR", options.author.clone());
        vars.insert("LICENSE", options.license.clone());
        vars.insert("CATEGORY", options.category.clone());
        vars.insert("WEBSITE", options.website.clone());
        vars.insert("SUMMARY", options.summary.clone());
        vars.insert(
            "APPLICATION",
            if options.application { "True" } else { "False" }.to_string(),
        );

        Self { variables: vars }
    }

    /// Add or replace a variable, consuming self.
    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Strict: a placeholder with no value is an error, so a typo in a
    /// template cannot leak into a generated file. Substituted values are not
    /// rescanned.
    pub fn render(&self, template_name: &str, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(DomainError::UnresolvedPlaceholder {
                    template: template_name.to_string(),
                    placeholder: after.chars().take(24).collect(),
                });
            };

            let key = &after[..end];
            let value = self.get(key).ok_or_else(|| DomainError::UnresolvedPlaceholder {
                template: template_name.to_string(),
                placeholder: key.to_string(),
            })?;
            out.push_str(value);
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}
