//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GRADLEGEN_*` environment variables
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Dialect used when neither the manifest nor `--dialect` names one.
    pub dialect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                dialect: "groovy".into(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(explicit_path: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("defaults.dialect", "groovy")?
            .set_default("output.no_color", false)?
            .set_default("output.format", "auto")?;

        match explicit_path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("GRADLEGEN").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Where the config file lives when `--config` is not given.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gradlegen")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Write this configuration to `path` as TOML.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pick_groovy() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.dialect, "groovy");
        assert_eq!(config.output.format, "auto");
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ndialect = \"kotlin\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.dialect, "kotlin");
        // Untouched sections keep their defaults.
        assert!(!config.output.no_color);
    }

    #[test]
    fn round_trips_through_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        AppConfig::default().write_to(&path).unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.dialect, "groovy");
    }
}
