//! Domain models: credentials, probe results and configuration.

pub mod config;
pub mod credentials;
pub mod probe;

pub use config::{Config, CredentialsConfig, LoggingConfig, OutputConfig, DEFAULT_ENDPOINT};
pub use credentials::CredentialPair;
pub use probe::{ProbeResult, DEFAULT_BODY_LIMIT};
