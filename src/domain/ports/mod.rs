//! Port trait definitions (Hexagonal Architecture)
//!
//! Interfaces that infrastructure adapters implement:
//! - CredentialSource: where the API key/secret pair comes from
//! - ProbeClient: the single authenticated call against the API
//!
//! The probe service only depends on these traits, so tests can swap in
//! fixed credentials or point the client at a local mock server.

pub mod credential_source;
pub mod probe_client;

pub use credential_source::CredentialSource;
pub use probe_client::ProbeClient;
