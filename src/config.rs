use crate::error::Result;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "prism.toml";

/// Main configuration structure for prism-init
///
/// Only ambient behaviour is configurable. What gets scaffolded is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub runtime: RuntimeConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub verbose: bool,
    pub dry_run: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(), // pretty, json, compact
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (PRISM_*)
    /// 2. prism.toml file (if exists)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }

    /// Load configuration from a specific directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let config_file = dir.join(CONFIG_FILE_NAME);
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        // PRISM_LOGGING__LEVEL, PRISM_RUNTIME__DRY_RUN, ...
        builder = builder.add_source(
            Environment::with_prefix("PRISM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?.try_deserialize::<Config>()?;
        Ok(config)
    }
}
