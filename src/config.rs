//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset file locations and column names
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Base directory for relative dataset paths
    #[serde(default)]
    pub data_dir: Option<String>,

    #[serde(default = "default_exchange_path")]
    pub exchange_path: String,

    #[serde(default = "default_exchange_key")]
    pub exchange_key: String,

    #[serde(default = "default_inflation_path")]
    pub inflation_path: String,

    #[serde(default = "default_inflation_key")]
    pub inflation_key: String,

    /// Year columns kept from the inflation file, in plot order
    #[serde(default = "default_inflation_years")]
    pub inflation_years: Vec<String>,

    #[serde(default = "default_activity_path")]
    pub activity_path: String,

    #[serde(default = "default_activity_key")]
    pub activity_key: String,

    #[serde(default = "default_interannual_column")]
    pub interannual_column: String,

    #[serde(default = "default_accumulated_column")]
    pub accumulated_column: String,
}

fn default_exchange_path() -> String {
    "cambio_dols.csv".to_string()
}

fn default_exchange_key() -> String {
    "Fecha".to_string()
}

fn default_inflation_path() -> String {
    "inflacion.csv".to_string()
}

fn default_inflation_key() -> String {
    "Periodo".to_string()
}

fn default_inflation_years() -> Vec<String> {
    (2019..=2023).map(|y| y.to_string()).collect()
}

fn default_activity_path() -> String {
    "imae.csv".to_string()
}

fn default_activity_key() -> String {
    "Período".to_string()
}

fn default_interannual_column() -> String {
    "Var. % interanual".to_string()
}

fn default_accumulated_column() -> String {
    "Var. % acumulada".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            exchange_path: default_exchange_path(),
            exchange_key: default_exchange_key(),
            inflation_path: default_inflation_path(),
            inflation_key: default_inflation_key(),
            inflation_years: default_inflation_years(),
            activity_path: default_activity_path(),
            activity_key: default_activity_key(),
            interannual_column: default_interannual_column(),
            accumulated_column: default_accumulated_column(),
        }
    }
}

impl DataConfig {
    /// Resolve a dataset path against `data_dir`. Absolute paths are kept.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.data_dir {
            Some(dir) if path.is_relative() => Path::new(dir).join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn exchange_file(&self) -> PathBuf {
        self.resolve(&self.exchange_path)
    }

    pub fn inflation_file(&self) -> PathBuf {
        self.resolve(&self.inflation_path)
    }

    pub fn activity_file(&self) -> PathBuf {
        self.resolve(&self.activity_path)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file among the default config locations
    pub fn discover() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("econdash").join("config.toml")),
            Some(PathBuf::from("/etc/econdash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Load from the default location, or environment only if there is none
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::discover() {
            Some(path) => Self::load_with_env(&path),
            None => Ok(Self::from_env()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Data overrides
        if let Ok(dir) = std::env::var("ECONDASH_DATA_DIR") {
            self.data.data_dir = Some(dir);
        }
        if let Ok(path) = std::env::var("ECONDASH_EXCHANGE_PATH") {
            self.data.exchange_path = path;
        }
        if let Ok(path) = std::env::var("ECONDASH_INFLATION_PATH") {
            self.data.inflation_path = path;
        }
        if let Ok(path) = std::env::var("ECONDASH_ACTIVITY_PATH") {
            self.data.activity_path = path;
        }

        // Server overrides
        if let Ok(host) = std::env::var("ECONDASH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ECONDASH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("ECONDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ECONDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Econdash Configuration
#
# Environment variables override these settings:
# - ECONDASH_DATA_DIR
# - ECONDASH_EXCHANGE_PATH
# - ECONDASH_INFLATION_PATH
# - ECONDASH_ACTIVITY_PATH
# - ECONDASH_HOST
# - ECONDASH_PORT
# - ECONDASH_LOG_LEVEL
# - ECONDASH_LOG_FORMAT

[data]
# Base directory for relative dataset paths
# data_dir = "/var/lib/econdash"

# USD exchange rate, one column per rate, indexed by date
exchange_path = "cambio_dols.csv"
exchange_key = "Fecha"

# Monthly inflation, one column per year
inflation_path = "inflacion.csv"
inflation_key = "Periodo"
inflation_years = ["2019", "2020", "2021", "2022", "2023"]

# Monthly economic activity index (IMAE)
activity_path = "imae.csv"
activity_key = "Período"
interannual_column = "Var. % interanual"
accumulated_column = "Var. % acumulada"

[server]
# Dashboard host
host = "0.0.0.0"

# Dashboard port
port = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
