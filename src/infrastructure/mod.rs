//! Infrastructure layer module
//!
//! Adapters and external integrations:
//! - Exoscale API client (reqwest)
//! - Credentials from environment variables
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod exoscale;
pub mod logging;
