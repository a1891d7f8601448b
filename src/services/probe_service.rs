//! The probe sequence: credentials, one request, result.

use tracing::{info, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::ProbeResult;
use crate::domain::ports::{CredentialSource, ProbeClient};

/// Runs a single probe against the configured endpoint
///
/// Credentials are loaded before the client is touched, so a missing
/// variable never produces network traffic. The pair is dropped as soon as
/// the request completes.
pub struct ProbeService<S, C> {
    credentials: S,
    client: C,
}

impl<S, C> ProbeService<S, C>
where
    S: CredentialSource,
    C: ProbeClient,
{
    /// Pair a credential source with the client that will use it.
    pub fn new(credentials: S, client: C) -> Self {
        Self {
            credentials,
            client,
        }
    }

    #[cfg(test)]
    fn client(&self) -> &C {
        &self.client
    }

    /// Perform the probe exactly once. No retries, whatever the outcome.
    #[instrument(skip(self), fields(endpoint = %self.client.endpoint()))]
    pub async fn run(&self) -> DomainResult<ProbeResult> {
        let credentials = self.credentials.load()?;
        let result = self.client.probe(&credentials).await?;
        drop(credentials);

        info!(status = result.status, "probe completed");
        Ok(result)
    }
}
