//! Domain layer for the probe
//!
//! Credential and result models, the error taxonomy and the port traits.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainResult, ProbeError};
