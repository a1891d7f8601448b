//! Credentials management infrastructure
//!
//! Reads the API key/secret pair from environment variables:
//! - Variable names come from configuration (defaults `EXOSCALE_API_KEY`,
//!   `EXOSCALE_API_SECRET`)
//! - Values are read once, per probe, and never cached or logged

use std::env::{self, VarError};

use tracing::debug;

use crate::domain::errors::{DomainResult, ProbeError};
use crate::domain::models::{CredentialPair, CredentialsConfig};
use crate::domain::ports::CredentialSource;

/// Credential source backed by two process environment variables
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    key_var: String,
    secret_var: String,
}

impl EnvCredentialSource {
    /// Read the pair from the two named variables.
    pub fn new(key_var: impl Into<String>, secret_var: impl Into<String>) -> Self {
        Self {
            key_var: key_var.into(),
            secret_var: secret_var.into(),
        }
    }

    /// Use the variable names from configuration.
    pub fn from_config(config: &CredentialsConfig) -> Self {
        Self::new(config.key_var.clone(), config.secret_var.clone())
    }

    /// Name of the API key variable.
    pub fn key_var(&self) -> &str {
        &self.key_var
    }

    /// Name of the API secret variable.
    pub fn secret_var(&self) -> &str {
        &self.secret_var
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::from_config(&CredentialsConfig::default())
    }
}

impl CredentialSource for EnvCredentialSource {
    fn load(&self) -> DomainResult<CredentialPair> {
        let api_key = read_var(&self.key_var)?;
        let api_secret = read_var(&self.secret_var)?;

        debug!(
            key_var = %self.key_var,
            secret_var = %self.secret_var,
            "credentials loaded from environment"
        );

        // read_var already rejected empty values
        CredentialPair::new(api_key, api_secret).ok_or_else(|| ProbeError::EmptyCredential {
            var: self.key_var.clone(),
        })
    }
}

/// Non-UTF-8 values are reported as missing: they cannot be sent as Basic Auth.
fn read_var(name: &str) -> DomainResult<String> {
    match env::var(name) {
        Ok(value) if value.is_empty() => Err(ProbeError::EmptyCredential {
            var: name.to_string(),
        }),
        Ok(value) => Ok(value),
        Err(VarError::NotPresent | VarError::NotUnicode(_)) => Err(ProbeError::MissingCredential {
            var: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "EXOPROBE_UNIT_TEST_KEY";
    const SECRET: &str = "EXOPROBE_UNIT_TEST_SECRET";

    fn source() -> EnvCredentialSource {
        EnvCredentialSource::new(KEY, SECRET)
    }

    #[test]
    fn test_load_both_present() {
        temp_env::with_vars([(KEY, Some("k1")), (SECRET, Some("s1"))], || {
            let pair = source().load().expect("credentials should load");
            assert_eq!(pair.api_key(), "k1");
            assert_eq!(pair.api_secret(), "s1");
        });
    }

    #[test]
    fn test_load_missing_key() {
        temp_env::with_vars([(KEY, None), (SECRET, Some("s1"))], || {
            let err = source().load().unwrap_err();
            assert!(matches!(err, ProbeError::MissingCredential { ref var } if var == KEY));
        });
    }

    #[test]
    fn test_load_missing_secret() {
        temp_env::with_vars([(KEY, Some("k1")), (SECRET, None)], || {
            let err = source().load().unwrap_err();
            assert!(matches!(err, ProbeError::MissingCredential { ref var } if var == SECRET));
        });
    }

    #[test]
    fn test_load_empty_value() {
        temp_env::with_vars([(KEY, Some("")), (SECRET, Some("s1"))], || {
            let err = source().load().unwrap_err();
            assert!(matches!(err, ProbeError::EmptyCredential { ref var } if var == KEY));
        });
    }

    #[test]
    fn test_default_variable_names() {
        let source = EnvCredentialSource::default();
        assert_eq!(source.key_var(), "EXOSCALE_API_KEY");
        assert_eq!(source.secret_var(), "EXOSCALE_API_SECRET");
    }

    #[test]
    fn test_error_does_not_leak_values() {
        temp_env::with_vars([(KEY, Some("leaky-key")), (SECRET, None)], || {
            let err = source().load().unwrap_err();
            assert!(!err.to_string().contains("leaky-key"));
        });
    }
}
