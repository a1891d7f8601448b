//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Optional project YAML files under `.exoprobe/`
//! - Environment variable overrides (`EXOPROBE_*`)
//! - Validation of endpoint, variable names and logging settings

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
