//! Application configuration file support.
//!
//! This module reads [`AppConfig`] from a TOML file and applies environment
//! overrides on top of it.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names a config file to read instead of searching the default locations.
pub const CONFIG_ENV: &str = "CRASH_STATS_CONFIG";
/// Overrides `dataset.path`.
pub const DATA_ENV: &str = "CRASH_STATS_DATA";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Source file and presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    /// File name offered by the CSV download.
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("Crash_Statistics_Victoria.csv")
}

fn default_export_file_name() -> String {
    "Crash_Statistics_Victoria.csv".to_string()
}

fn default_title() -> String {
    "Victorian Accidents Data Visualiser".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            export_file_name: default_export_file_name(),
            title: default_title(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from the default location.
    ///
    /// Reads the file named by `CRASH_STATS_CONFIG` when set, otherwise the first
    /// `crash-stats.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists. Environment overrides are
    /// applied last.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => {
                log::info!("Reading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                log::info!("No crash-stats.toml found, using default configuration");
                Self::default()
            }
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let search_paths = [
            PathBuf::from("crash-stats.toml"),
            PathBuf::from("backend/crash-stats.toml"),
            PathBuf::from("../crash-stats.toml"),
        ];
        search_paths.into_iter().find(|path| path.exists())
    }

    /// Apply `HOST`, `PORT` and `CRASH_STATS_DATA` when set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port,
            })?;
        }
        if let Ok(path) = env::var(DATA_ENV) {
            self.dataset.path = PathBuf::from(path);
        }
        Ok(())
    }

    /// `host:port` as given in the configuration.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
