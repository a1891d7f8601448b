//! Domain errors for the probe.

use thiserror::Error;

/// Everything that can stop a probe before a response is printed.
///
/// A non-success HTTP status is not represented here: it is an ordinary
/// [`ProbeResult`](super::models::ProbeResult).
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The environment variable is not set.
    #[error("Missing required environment variable: {var}")]
    MissingCredential { var: String },

    /// The environment variable is set to an empty string.
    #[error("Environment variable {var} is set but empty")]
    EmptyCredential { var: String },

    /// The endpoint is not an absolute http(s) URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// DNS, connection, timeout or body read failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProbeError {
    /// True for failures detected before any network activity.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ProbeError::MissingCredential { .. }
                | ProbeError::EmptyCredential { .. }
                | ProbeError::InvalidEndpoint(_)
        )
    }
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, ProbeError>;
