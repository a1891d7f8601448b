//! Service layer: orchestrates the domain ports.

pub mod probe_service;

pub use probe_service::ProbeService;
