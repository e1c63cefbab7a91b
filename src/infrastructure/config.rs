//! Configuration infrastructure
//!
//! All settings are optional. Defaults come from `serde`; a config file
//! (TOML, JSON or YAML, picked by extension) can override any of them.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub use super::http_client::HttpClientConfig;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote fetch settings
    pub http: HttpClientConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Also write logs to `log_dir`
    pub file_output: bool,

    /// Directory for the log file when `file_output` is set
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            file_output: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.is_file() {
            bail!("config file {} does not exist", path.display());
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        let app_config: Self = settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(app_config)
    }

    /// Raise the log level for `-v` flags; zero leaves the configured level alone
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.logging.level = "debug".to_string(),
            _ => self.logging.level = "trace".to_string(),
        }
        self
    }
}
