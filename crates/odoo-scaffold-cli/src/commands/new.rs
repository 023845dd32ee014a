//! Implementation of the `odoo-scaffold new` command.
//!
//! Responsibility: translate CLI arguments and configuration into a
//! `GenerateRequest`, call the core scaffold service, and display results.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use odoo_scaffold_adapters::local_service;
use odoo_scaffold_core::{
    application::{GenerateRequest, Report},
    domain::{Bundle, DerivedNames, ModuleOptions, PlatformVersion, VisibilityDialect},
};

use crate::{cli::NewArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the `odoo-scaffold new` command.
#[instrument(skip_all, fields(module = %args.identifier))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config);
    debug!(
        path = %request.output_path.display(),
        version = %request.platform_version,
        "Request resolved"
    );

    let service = local_service();

    if args.dry_run {
        let (names, bundle) = service.preview(&request)?;
        let plan = Plan::new(&request, &names, &bundle);
        return show_plan(&plan, &output);
    }

    info!(module = %args.identifier, "Scaffold started");
    let report = service.generate(&request)?;
    info!(files = report.file_count(), "Scaffold completed");

    show_report(&report, &output)
}

/// Flags win over configuration, configuration over built-in defaults.
fn build_request(args: &NewArgs, config: &AppConfig) -> GenerateRequest {
    let output_path = args
        .path
        .clone()
        .unwrap_or_else(|| config.defaults.output_path.clone());
    let version = args.odoo_version.unwrap_or_else(|| config.platform_version());

    GenerateRequest::new(args.identifier.clone(), output_path)
        .platform_version(version)
        .options(module_options(args, config))
}

fn module_options(args: &NewArgs, config: &AppConfig) -> ModuleOptions {
    let mut options = config.module_options();
    if let Some(author) = &args.author {
        options = options.with_author(author.as_str());
    }
    if let Some(license) = &args.license {
        options = options.with_license(license.as_str());
    }
    if let Some(category) = &args.category {
        options = options.with_category(category.as_str());
    }
    if let Some(website) = &args.website {
        options = options.with_website(website.as_str());
    }
    if let Some(summary) = &args.summary {
        options = options.with_summary(summary.as_str());
    }
    options.extra_depends = args
        .depends
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();
    options.application = !args.no_application;
    options
}

// ── Output ────────────────────────────────────────────────────────────────────

fn show_report(report: &Report, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    output.success(&format!(
        "Module '{}' scaffolded at {}",
        report.module,
        report.module_dir.display()
    ))?;
    output.print(&format!("  Odoo version: {}", report.platform_version))?;
    output.print(&format!("  Model: {}", report.model_name))?;
    output.print(&format!("  Visibility style: {}", report.dialect))?;
    output.print("Created files:")?;
    for file in report.relative_files() {
        output.item(&file.display().to_string())?;
    }
    Ok(())
}

/// What a run would create, without touching the filesystem.
#[derive(Debug, Serialize)]
struct Plan {
    dry_run: bool,
    module: String,
    module_dir: PathBuf,
    model_name: String,
    platform_version: PlatformVersion,
    dialect: VisibilityDialect,
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Plan {
    fn new(request: &GenerateRequest, names: &DerivedNames, bundle: &Bundle) -> Self {
        let mut files: Vec<PathBuf> = bundle
            .artifacts()
            .iter()
            .map(|a| a.relative_path.as_path().to_path_buf())
            .collect();
        files.sort();

        Self {
            dry_run: true,
            module: names.record_id_prefix.clone(),
            module_dir: request.output_path.join(names.module().as_str()),
            model_name: names.dotted_name.clone(),
            platform_version: names.platform_version,
            dialect: names.visibility_dialect,
            directories: bundle
                .directories()
                .iter()
                .map(|d| d.as_path().to_path_buf())
                .collect(),
            files,
        }
    }
}

fn show_plan(plan: &Plan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would scaffold '{}' at {}",
        plan.module,
        plan.module_dir.display()
    ))?;
    output.print(&format!("  Odoo version: {}", plan.platform_version))?;
    output.print(&format!("  Model: {}", plan.model_name))?;
    output.print(&format!("  Visibility style: {}", plan.dialect))?;
    output.print("Would create files:")?;
    for file in &plan.files {
        output.item(&file.display().to_string())?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn new_args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["odoo-scaffold", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let mut config = AppConfig::default();
        config.defaults.output_path = PathBuf::from("/srv/addons");
        config.defaults.odoo_version = 16;
        config.manifest.author = Some("Config Author".into());

        let request = build_request(&new_args(&["task_tracker"]), &config);

        assert_eq!(request.output_path, PathBuf::from("/srv/addons"));
        assert_eq!(request.platform_version, PlatformVersion::new(16));
        assert_eq!(request.options.author, "Config Author");
        assert!(request.options.application);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.manifest.author = Some("Config Author".into());

        let args = new_args(&[
            "task_tracker",
            "--path",
            "./addons",
            "--odoo-version",
            "17.0",
            "--author",
            "Flag Author",
            "--summary",
            "Tracks tasks",
            "--depends",
            "sale, ,stock",
            "--no-application",
        ]);
        let request = build_request(&args, &config);

        assert_eq!(request.output_path, PathBuf::from("./addons"));
        assert_eq!(request.platform_version, PlatformVersion::new(17));
        assert_eq!(request.options.author, "Flag Author");
        assert_eq!(request.options.summary, "Tracks tasks");
        assert_eq!(request.options.extra_depends, vec!["sale", "stock"]);
        assert!(!request.options.application);
    }

    #[test]
    fn plan_lists_files_under_module_dir() {
        let request = GenerateRequest::new("library_management", "/tmp/addons");
        let (names, bundle) = local_service().preview(&request).unwrap();
        let plan = Plan::new(&request, &names, &bundle);

        assert!(plan.dry_run);
        assert_eq!(plan.module_dir, PathBuf::from("/tmp/addons/library_management"));
        assert_eq!(plan.files.len(), 8);
        assert!(plan.files.contains(&PathBuf::from("models/library_management.py")));
        assert_eq!(plan.dialect, VisibilityDialect::Expression);
    }
}
