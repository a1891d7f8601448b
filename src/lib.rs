//! exoprobe - one-shot Exoscale API probe
//!
//! Reads an API key/secret pair from the environment, sends a single GET to
//! the compute instance listing with HTTP Basic Authentication and reports
//! the status code plus the first 500 characters of the body. Any HTTP
//! status counts as a result; only missing credentials, bad configuration
//! and transport failures are errors.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential and result models, errors, ports
//! - **Service Layer** (`services`): the ordered probe sequence
//! - **Infrastructure Layer** (`infrastructure`): env credentials, reqwest
//!   client, figment config, tracing setup
//! - **CLI Layer** (`cli`): argument parsing and output
//!
//! # Example
//!
//! ```no_run
//! use exoprobe::infrastructure::credentials::EnvCredentialSource;
//! use exoprobe::infrastructure::exoscale::ExoscaleClient;
//! use exoprobe::services::ProbeService;
//! use exoprobe::domain::models::{DEFAULT_BODY_LIMIT, DEFAULT_ENDPOINT};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ExoscaleClient::new(DEFAULT_ENDPOINT)?;
//!     let service = ProbeService::new(EnvCredentialSource::default(), client);
//!     let result = service.run().await?;
//!     println!("Status: {}", result.status);
//!     println!("Response: {}", result.truncated_body(DEFAULT_BODY_LIMIT));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::models::{Config, CredentialPair, ProbeResult};
pub use domain::ports::{CredentialSource, ProbeClient};
pub use domain::ProbeError;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::exoscale::ExoscaleClient;
pub use services::ProbeService;
