//! # Configuration
//!
//! Manages the loading and parsing of the optional configuration file (`config.yaml`).
//! Defines the structs for server identity and logging setup.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "project-directory";
pub const CONFIG_FILE: &str = "config.yaml";

/// Main application configuration structure.
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity advertised to MCP clients during initialization.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            instructions: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for the session log. No file log when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            file: default_log_file(),
        }
    }
}

fn default_server_name() -> String {
    "ProjectDirectory".to_string()
}

fn default_log_level() -> String {
    "info,rmcp=warn".to_string()
}

fn default_log_file() -> String {
    "session.log".to_string()
}

impl AppConfig {
    /// Parses a configuration document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config.yaml")
    }

    /// Reads and parses the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Otherwise the per-user default location is
    /// tried and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Returns `<config_dir>/project-directory/config.yaml` when a config dir is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
