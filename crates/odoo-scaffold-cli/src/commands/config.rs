//! `odoo-scaffold config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_ref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unset = || "(unset)".to_string();
    match key {
        "defaults.odoo_version" => Ok(config.defaults.odoo_version.to_string()),
        "defaults.output_path" => Ok(config.defaults.output_path.display().to_string()),
        "manifest.author" => Ok(config.manifest.author.clone().unwrap_or_else(unset)),
        "manifest.license" => Ok(config.manifest.license.clone().unwrap_or_else(unset)),
        "manifest.category" => Ok(config.manifest.category.clone().unwrap_or_else(unset)),
        "manifest.website" => Ok(config.manifest.website.clone().unwrap_or_else(unset)),
        "manifest.summary" => Ok(config.manifest.summary.clone().unwrap_or_else(unset)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.odoo_version").unwrap(), "17");
        assert_eq!(get_config_value(&cfg, "defaults.output_path").unwrap(), ".");
    }

    #[test]
    fn unset_manifest_value() {
        let mut cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "manifest.author").unwrap(), "(unset)");
        cfg.manifest.author = Some("Acme".into());
        assert_eq!(get_config_value(&cfg, "manifest.author").unwrap(), "Acme");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        let err = get_config_value(&cfg, "does.not.exist").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
