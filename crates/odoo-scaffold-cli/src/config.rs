//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ODOO_SCAFFOLD_<SECTION>__<KEY>`,
//!    e.g. `ODOO_SCAFFOLD_MANIFEST__AUTHOR`
//! 3. Config file: `--config <FILE>` (must exist) or [`AppConfig::config_path`]
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use odoo_scaffold_core::domain::{ModuleOptions, PlatformVersion};
use serde::{Deserialize, Serialize};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ODOO_SCAFFOLD";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `new` and `names`.
    pub defaults: Defaults,
    /// Manifest values applied unless overridden by flags.
    pub manifest: ManifestConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub odoo_version: u32,
    pub output_path: PathBuf,
}

/// Unset keys fall back to [`ModuleOptions::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            odoo_version: PlatformVersion::DEFAULT.major(),
            output_path: PathBuf::from("."),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            manifest: ManifestConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. Without
    /// it the default location is used when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, std::env::vars())
    }

    /// [`Self::load`] with an explicit environment, for tests.
    fn load_from(
        path: &Path,
        required: bool,
        env: impl IntoIterator<Item = (String, String)>,
    ) -> anyhow::Result<Self> {
        let env: config::Map<String, String> = env
            .into_iter()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect();

        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let loaded: Self = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env)),
            )
            .build()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")?;

        if loaded.defaults.odoo_version == 0 {
            anyhow::bail!("defaults.odoo_version must be a positive Odoo major version");
        }

        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.odoo-scaffold.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "odoo-scaffold", "odoo-scaffold")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".odoo-scaffold.toml"))
    }

    /// The file `init` writes to and `config path` reports.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    pub fn platform_version(&self) -> PlatformVersion {
        PlatformVersion::new(self.defaults.odoo_version)
    }

    /// Manifest options with configured values applied.
    pub fn module_options(&self) -> ModuleOptions {
        let m = self.manifest.clone();
        let mut options = ModuleOptions::default();
        if let Some(author) = m.author {
            options = options.with_author(author);
        }
        if let Some(license) = m.license {
            options = options.with_license(license);
        }
        if let Some(category) = m.category {
            options = options.with_category(category);
        }
        if let Some(website) = m.website {
            options = options.with_website(website);
        }
        if let Some(summary) = m.summary {
            options = options.with_summary(summary);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> Vec<(String, String)> {
        Vec::new()
    }

    #[test]
    fn defaults_target_current_odoo() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.odoo_version, 17);
        assert_eq!(cfg.defaults.output_path, PathBuf::from("."));
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
        assert_eq!(cfg.module_options(), ModuleOptions::default());
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("none.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("none.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nodoo_version = 16\n\n[manifest]\nauthor = \"Acme\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.platform_version(), PlatformVersion::new(16));
        assert_eq!(cfg.module_options().author, "Acme");
        assert_eq!(cfg.module_options().license, "LGPL-3");
    }

    #[test]
    fn summary_comes_from_manifest_section() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[manifest]\nsummary = \"Track tasks\"\n").unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.module_options().summary, "Track tasks");
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[manifest]\nauthor = \"File\"\n").unwrap();

        let env = vec![
            ("ODOO_SCAFFOLD_MANIFEST__AUTHOR".to_string(), "Env".to_string()),
            ("ODOO_SCAFFOLD_DEFAULTS__ODOO_VERSION".to_string(), "15".to_string()),
            ("UNRELATED".to_string(), "x".to_string()),
        ];
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.manifest.author.as_deref(), Some("Env"));
        assert_eq!(cfg.defaults.odoo_version, 15);
    }

    #[test]
    fn zero_version_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nodoo_version = 0\n").unwrap();
        assert!(AppConfig::load_from(&path, true, no_env()).is_err());
    }

    #[test]
    fn default_config_serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[defaults]"));
        assert!(text.contains("odoo_version = 17"));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }
}
