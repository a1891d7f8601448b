//! Implementation of the probe command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, ProbeResult};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::EnvCredentialSource;
use crate::infrastructure::exoscale::ExoscaleClient;
use crate::services::ProbeService;

/// Flags that adjust where and how the probe runs
#[derive(Args, Debug, Default)]
pub struct ProbeArgs {
    /// Read settings from this YAML file instead of .exoprobe/
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// URL to probe (defaults to the ch-gva-2 instance listing)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,
}

/// What the probe prints: the status and the truncated body
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProbeOutput {
    /// HTTP status code as returned
    pub status: u16,
    /// Body cut to the configured character limit
    pub response: String,
}

impl ProbeOutput {
    /// Truncate a result's body for display.
    pub fn from_result(result: &ProbeResult, max_body_chars: usize) -> Self {
        Self {
            status: result.status,
            response: result.truncated_body(max_body_chars).to_string(),
        }
    }
}

impl CommandOutput for ProbeOutput {
    fn to_human(&self) -> String {
        format!("Status: {}\nResponse: {}", self.status, self.response)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Build the effective configuration: files and env first, CLI flags last.
pub fn resolve_config(args: &ProbeArgs) -> Result<Config> {
    let mut config = match args.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(ref endpoint) = args.endpoint {
        config.endpoint.clone_from(endpoint);
        ConfigLoader::validate(&config).context("Invalid --endpoint")?;
    }

    Ok(config)
}

/// Run the probe and return what would be printed.
pub async fn run(config: &Config) -> Result<ProbeOutput> {
    let credentials = EnvCredentialSource::from_config(&config.credentials);
    let client = ExoscaleClient::new(&config.endpoint)?;
    let service = ProbeService::new(credentials, client);

    let result = service
        .run()
        .await
        .with_context(|| format!("Probe of {} failed", config.endpoint))?;

    Ok(ProbeOutput::from_result(&result, config.output.max_body_chars))
}

/// Run the probe and print the result on stdout.
pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let output_data = run(config).await?;
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::render;

    #[test]
    fn test_human_output_is_two_lines() {
        let out = ProbeOutput {
            status: 200,
            response: r#"{"instances":[]}"#.to_string(),
        };
        assert_eq!(
            render(&out, false),
            "Status: 200\nResponse: {\"instances\":[]}"
        );
    }

    #[test]
    fn test_json_output() {
        let out = ProbeOutput {
            status: 401,
            response: "Unauthorized".to_string(),
        };
        let value: serde_json::Value = serde_json::from_str(&render(&out, true)).unwrap();
        assert_eq!(value["status"], 401);
        assert_eq!(value["response"], "Unauthorized");
    }

    #[test]
    fn test_from_result_truncates() {
        let result = ProbeResult::new(200, "abcdef");
        let out = ProbeOutput::from_result(&result, 3);
        assert_eq!(out.response, "abc");
        assert_eq!(out.status, 200);
    }

    #[test]
    fn test_resolve_config_endpoint_flag_wins() {
        let args = ProbeArgs {
            config: None,
            endpoint: Some("http://127.0.0.1:4010/v2/instance".to_string()),
        };
        let config = temp_env::with_var(
            "EXOPROBE_ENDPOINT",
            Some("http://other/v2/instance"),
            || resolve_config(&args).unwrap(),
        );
        assert_eq!(config.endpoint, "http://127.0.0.1:4010/v2/instance");
    }

    #[test]
    fn test_resolve_config_rejects_bad_endpoint_flag() {
        let args = ProbeArgs {
            config: None,
            endpoint: Some("nope".to_string()),
        };
        assert!(resolve_config(&args).is_err());
    }
}
