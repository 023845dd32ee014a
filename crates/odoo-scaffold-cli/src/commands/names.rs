//! `odoo-scaffold names`: show what an identifier derives to.
//!
//! Nothing is rendered or written; an invalid identifier fails the same way
//! `new` would.

use serde::Serialize;
use tracing::instrument;

use odoo_scaffold_core::{
    domain::{DerivedNames, ModuleName},
    error::ScaffoldError,
};

use crate::{
    cli::{NamesArgs, NamesFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(module = %args.identifier))]
pub fn execute(args: NamesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let module = ModuleName::parse(args.identifier.as_str()).map_err(ScaffoldError::from)?;
    let version = args.odoo_version.unwrap_or_else(|| config.platform_version());
    let names = DerivedNames::derive(&module, version);

    if args.format == NamesFormat::Json || output.is_json() {
        output.json(&NamesView::new(&names))?;
    } else {
        output.table(&rows(&names))?;
    }
    Ok(())
}

/// Derived names plus the shared record ids.
#[derive(Debug, Serialize)]
struct NamesView<'a> {
    #[serde(flatten)]
    names: &'a DerivedNames,
    manifest_version: String,
    ids: Ids,
}

#[derive(Debug, Serialize)]
struct Ids {
    user_group: String,
    manager_group: String,
    form_view: String,
    tree_view: String,
    search_view: String,
    action: String,
    root_menu: String,
    main_menu: String,
    list_menu: String,
}

impl<'a> NamesView<'a> {
    fn new(names: &'a DerivedNames) -> Self {
        Self {
            names,
            manifest_version: names.manifest_version(),
            ids: Ids {
                user_group: names.user_group_id(),
                manager_group: names.manager_group_id(),
                form_view: names.form_view_id(),
                tree_view: names.tree_view_id(),
                search_view: names.search_view_id(),
                action: names.action_id(),
                root_menu: names.root_menu_id(),
                main_menu: names.main_menu_id(),
                list_menu: names.list_menu_id(),
            },
        }
    }
}

fn rows(names: &DerivedNames) -> Vec<(&'static str, String)> {
    vec![
        ("module", names.record_id_prefix.clone()),
        ("human_name", names.human_name.clone()),
        ("model_name", names.dotted_name.clone()),
        ("class_name", names.class_name.clone()),
        ("model_reference", names.model_reference_id.clone()),
        ("odoo_version", names.platform_version.to_string()),
        ("manifest_version", names.manifest_version()),
        ("visibility_style", names.visibility_dialect.to_string()),
        ("model_file", names.model_file()),
        ("views_file", names.views_file()),
        ("user_group", names.user_group_id()),
        ("manager_group", names.manager_group_id()),
        ("action", names.action_id()),
        ("root_menu", names.root_menu_id()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use odoo_scaffold_core::domain::PlatformVersion;

    fn names(id: &str, version: u32) -> DerivedNames {
        DerivedNames::derive(&ModuleName::parse(id).unwrap(), PlatformVersion::new(version))
    }

    #[test]
    fn table_rows_use_derived_values() {
        let rows = rows(&names("library_management", 17));
        let get = |key: &str| rows.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone());

        assert_eq!(get("human_name").as_deref(), Some("Library Management"));
        assert_eq!(get("model_name").as_deref(), Some("library.management"));
        assert_eq!(get("class_name").as_deref(), Some("LibraryManagement"));
        assert_eq!(get("visibility_style").as_deref(), Some("expressions"));
    }

    #[test]
    fn json_view_flattens_names_and_adds_ids() {
        let names = names("task_tracker", 16);
        let value = serde_json::to_value(NamesView::new(&names)).unwrap();

        assert_eq!(value["dotted_name"], "task.tracker");
        assert_eq!(value["visibility_dialect"], "attrs_legacy");
        assert_eq!(value["manifest_version"], "16.0.1.0.0");
        assert_eq!(value["ids"]["user_group"], "group_task_tracker_user");
        assert_eq!(value["ids"]["action"], "action_task_tracker");
    }
}
