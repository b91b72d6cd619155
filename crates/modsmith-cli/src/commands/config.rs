//! `modsmith config`: read and write configuration values.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::{AppConfig, KEYS},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config` is the effective configuration (file plus environment);
/// `set` edits the file alone.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key '{key}' (known keys: {})", KEYS.join(", ")),
                source: None,
            })?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(config_file);
            let mut stored = AppConfig::load_file(&path).map_err(CliError::config)?;
            stored.set(&key, &value).map_err(CliError::config)?;
            stored.save(&path).map_err(CliError::config)?;
            output.success(&format!("{key} = {value}  ({})", path.display()))?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&config.to_toml().map_err(CliError::config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::resolve_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}
