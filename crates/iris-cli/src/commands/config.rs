//! `iris config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, describe_store},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&format!("{key} = {}", lookup(&config, &key)?))?;
        }
        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(render_toml(&config)?.trim_end())?;
            output.print(&format!("# store file: {}", describe_store(&config)))?;
        }
        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }
    Ok(())
}

fn render_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Value of a dotted key. `store.path` resolves the default location.
fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "store.backend" => config.store.backend.to_string(),
        "store.path" => config.store_path().display().to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!(
                    "Unknown config key '{key}' (expected store.backend, store.path or output.no_color)"
                ),
                source: None,
            });
        }
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────
