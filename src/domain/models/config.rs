//! Non-secret settings and their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::probe::DEFAULT_BODY_LIMIT;

/// Instance listing endpoint in the `ch-gva-2` zone.
pub const DEFAULT_ENDPOINT: &str = "https://api-ch-gva-2.exoscale.com/v2/instance";

/// Main configuration structure for exoprobe
///
/// Holds only non-secret settings. The credential values themselves are
/// always read from the environment variables named in [`CredentialsConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// URL the probe sends its GET request to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Where to find the API key and secret
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            credentials: CredentialsConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Names of the environment variables holding the credential pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Variable holding the API key (Basic Auth username)
    #[serde(default = "default_key_var")]
    pub key_var: String,

    /// Variable holding the API secret (Basic Auth password)
    #[serde(default = "default_secret_var")]
    pub secret_var: String,
}

fn default_key_var() -> String {
    "EXOSCALE_API_KEY".to_string()
}

fn default_secret_var() -> String {
    "EXOSCALE_API_SECRET".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            key_var: default_key_var(),
            secret_var: default_secret_var(),
        }
    }
}

/// Console output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Maximum number of body characters printed
    #[serde(default = "default_max_body_chars")]
    pub max_body_chars: usize,
}

const fn default_max_body_chars() -> usize {
    DEFAULT_BODY_LIMIT
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_body_chars: default_max_body_chars(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a JSON log file; logs only go to stderr when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "never".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
