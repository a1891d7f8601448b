//! Where the credential pair comes from.

use crate::domain::errors::DomainResult;
use crate::domain::models::CredentialPair;

/// Supplies the credential pair for a probe.
///
/// Implementations must fail rather than return a partial pair; the probe
/// service never sends a request when `load` returns an error.
pub trait CredentialSource: Send + Sync {
    /// Produce the full pair or fail without side effects.
    fn load(&self) -> DomainResult<CredentialPair>;
}

