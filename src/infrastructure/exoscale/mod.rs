//! Exoscale API adapter.

pub mod client;

pub use client::{parse_endpoint, ExoscaleClient};
