//! `gradlegen config` — inspect or initialise configuration.

use clap::Args;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Args)]
pub struct ConfigCmd {
    /// Write a default config file if none exists.
    #[arg(long)]
    pub init: bool,
}

pub fn execute(cmd: ConfigCmd, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if cmd.init {
        let path = AppConfig::default_config_path().ok_or_else(|| CliError::ConfigError {
            message: "could not determine the platform config directory".into(),
            source: None,
        })?;
        if path.exists() {
            return Err(CliError::ConfigError {
                message: format!("config file already exists at {}", path.display()),
                source: None,
            });
        }
        AppConfig::default()
            .write_to(&path)
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: None,
            })?;
        output.success(&format!("Wrote default config to {}", path.display()));
        return Ok(());
    }

    if output.is_json() {
        return output.json(&config);
    }
    let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: None,
    })?;
    output.text(&rendered);
    Ok(())
}
