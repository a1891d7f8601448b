//! Figment-based configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::exoscale::parse_endpoint;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unknown `logging.level`.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown `logging.format`.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown `logging.rotation`.
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    /// A credential variable name is blank.
    #[error("Environment variable name for {0} cannot be empty")]
    EmptyVariableName(&'static str),

    /// `output.max_body_chars` is zero.
    #[error("Invalid max_body_chars: {0}. Must be at least 1")]
    InvalidBodyLimit(usize),

    /// `endpoint` is not an absolute http(s) URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The file passed with `--config` does not exist.
    #[error("Config file not found: {}", .0.display())]
    FileNotFound(PathBuf),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .exoprobe/config.yaml (project config, optional)
    /// 3. .exoprobe/local.yaml (project local overrides, optional)
    /// 4. Environment variables (EXOPROBE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".exoprobe/config.yaml"))
            .merge(Yaml::file(".exoprobe/local.yaml"))
            .merge(Env::prefixed("EXOPROBE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file. Unlike the
    /// project files, an explicitly named file must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("EXOPROBE_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        parse_endpoint(&config.endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(config.endpoint.clone()))?;

        if config.credentials.key_var.trim().is_empty() {
            return Err(ConfigError::EmptyVariableName("credentials.key_var"));
        }
        if config.credentials.secret_var.trim().is_empty() {
            return Err(ConfigError::EmptyVariableName("credentials.secret_var"));
        }

        if config.output.max_body_chars == 0 {
            return Err(ConfigError::InvalidBodyLimit(config.output.max_body_chars));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
