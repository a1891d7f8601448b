//! The authenticated call against the probed API.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CredentialPair, ProbeResult};

/// Performs one authenticated GET against the probed endpoint.
///
/// Every HTTP response, whatever its status, comes back as `Ok`. Only
/// transport failures (DNS, connect, timeout, body read) are errors.
#[async_trait]
pub trait ProbeClient: Send + Sync {
    /// Send the request with the given credentials and return what came back.
    async fn probe(&self, credentials: &CredentialPair) -> DomainResult<ProbeResult>;

    /// URL the client sends its request to.
    fn endpoint(&self) -> &str;
}
