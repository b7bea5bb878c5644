//! Configuration file support for wstat.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/workout-stats/config.toml`.

use crate::{default_packages, Error, Package, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    /// Packages reported when no input file is given
    #[serde(default = "default_packages")]
    pub packages: Vec<Package>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            packages: default_packages(),
        }
    }
}

/// Report rendering format
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Output configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        base.join("workout-stats").join("config.toml")
    }

    /// Check that configured packages are well-formed
    ///
    /// Only the shape is checked here; codes and readings are validated by
    /// the factory when the packages are built.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self
            .packages
            .iter()
            .position(|p| p.workout_type.trim().is_empty())
        {
            return Err(Error::Config(format!(
                "Package {} has an empty workout_type",
                index + 1
            )));
        }
        Ok(())
    }
}
