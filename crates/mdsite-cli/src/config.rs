//! Site configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mdsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown source tree
    pub content_dir: PathBuf,
    /// Assets copied verbatim into the output
    pub static_dir: PathBuf,
    /// Page template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    /// Destination tree, wiped on every build
    pub output_dir: PathBuf,
    /// Prefix for root-relative `href="/` and `src="/` links
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. A missing file yields `None`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Load config from a TOML file, or return defaults if not found
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }
}
