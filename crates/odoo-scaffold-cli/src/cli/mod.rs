//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use odoo_scaffold_core::domain::PlatformVersion;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "odoo-scaffold",
    bin_name = "odoo-scaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Odoo addon module scaffolding",
    long_about = "odoo-scaffold generates a complete Odoo addon module: manifest, \
                  model stub with a draft/confirmed/done/cancelled lifecycle, \
                  access rights, views and menus, all cross-referenced consistently.",
    after_help = "EXAMPLES:\n\
        \x20 odoo-scaffold new library_management --path ./addons\n\
        \x20 odoo-scaffold new task_tracker --path ./addons --odoo-version 16\n\
        \x20 odoo-scaffold names library_management --format json\n\
        \x20 odoo-scaffold completions bash > /usr/share/bash-completion/completions/odoo-scaffold",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new addon module.
    #[command(
        visible_alias = "n",
        about = "Create a new Odoo module",
        after_help = "EXAMPLES:\n\
            \x20 odoo-scaffold new library_management --path ./addons\n\
            \x20 odoo-scaffold new task_tracker --path ./addons --odoo-version 16\n\
            \x20 odoo-scaffold new fleet_extra --author \"Acme\" --depends fleet --dry-run"
    )]
    New(NewArgs),

    /// Show the names derived from an identifier.
    #[command(
        about = "Show derived names without generating anything",
        after_help = "EXAMPLES:\n\
            \x20 odoo-scaffold names library_management\n\
            \x20 odoo-scaffold names task_tracker --odoo-version 16 --format json"
    )]
    Names(NamesArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 odoo-scaffold init                      # default location\n\
            \x20 odoo-scaffold --config ./scaffold.toml init\n\
            \x20 odoo-scaffold init --force              # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 odoo-scaffold completions bash > ~/.local/share/bash-completion/completions/odoo-scaffold\n\
            \x20 odoo-scaffold completions zsh  > ~/.zfunc/_odoo-scaffold\n\
            \x20 odoo-scaffold completions fish > ~/.config/fish/completions/odoo-scaffold.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 odoo-scaffold config get defaults.odoo_version\n\
            \x20 odoo-scaffold config list\n\
            \x20 odoo-scaffold config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `odoo-scaffold new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Technical module name, e.g. `library_management`.
    #[arg(value_name = "IDENTIFIER", help = "Technical module name (snake_case)")]
    pub identifier: String,

    /// Directory the module is created in.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Output directory (default: defaults.output_path, then '.')"
    )]
    pub path: Option<PathBuf>,

    /// Target Odoo major version.
    #[arg(
        long = "odoo-version",
        value_name = "VERSION",
        help = "Odoo major version, e.g. 16 or 17.0 (default: 17)"
    )]
    pub odoo_version: Option<PlatformVersion>,

    #[arg(long = "author", value_name = "NAME", help = "Manifest author")]
    pub author: Option<String>,

    #[arg(long = "license", value_name = "LICENSE", help = "Manifest license, e.g. LGPL-3")]
    pub license: Option<String>,

    #[arg(long = "category", value_name = "CATEGORY", help = "Manifest category")]
    pub category: Option<String>,

    #[arg(long = "website", value_name = "URL", help = "Manifest website")]
    pub website: Option<String>,

    #[arg(long = "summary", value_name = "TEXT", help = "Manifest summary")]
    pub summary: Option<String>,

    /// Extra modules to depend on, after `base` and `mail`.
    #[arg(
        long = "depends",
        value_name = "MODULE",
        value_delimiter = ',',
        help = "Additional dependencies (comma separated)"
    )]
    pub depends: Vec<String>,

    /// Generate a technical module rather than an application.
    #[arg(long = "no-application", help = "Set 'application': False in the manifest")]
    pub no_application: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── names ─────────────────────────────────────────────────────────────────────

/// Arguments for `odoo-scaffold names`.
#[derive(Debug, Args)]
pub struct NamesArgs {
    #[arg(value_name = "IDENTIFIER", help = "Technical module name (snake_case)")]
    pub identifier: String,

    #[arg(
        long = "odoo-version",
        value_name = "VERSION",
        help = "Odoo major version (default: 17)"
    )]
    pub odoo_version: Option<PlatformVersion>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: NamesFormat,
}

/// Output format for the `names` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamesFormat {
    /// Aligned `key  value` rows.
    Table,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `odoo-scaffold init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `odoo-scaffold completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `odoo-scaffold config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `manifest.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
