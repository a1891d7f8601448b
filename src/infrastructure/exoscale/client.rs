//! reqwest-backed probe client for the Exoscale compute API

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use tracing::{debug, info, instrument};

use crate::domain::errors::{DomainResult, ProbeError};
use crate::domain::models::{CredentialPair, ProbeResult};
use crate::domain::ports::ProbeClient;

/// HTTP client that issues the single authenticated instance-listing GET
///
/// The request carries HTTP Basic Authentication and nothing else: no body,
/// no custom headers, no retry, and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ExoscaleClient {
    http_client: ReqwestClient,
    endpoint: Url,
}

impl ExoscaleClient {
    /// Create a client for the given endpoint URL
    ///
    /// # Errors
    /// * `ProbeError::InvalidEndpoint` - URL does not parse or is not http(s)
    /// * `ProbeError::Transport` - the underlying HTTP client failed to build
    pub fn new(endpoint: &str) -> DomainResult<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let http_client = ReqwestClient::builder().build()?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }
}

#[async_trait]
impl ProbeClient for ExoscaleClient {
    #[instrument(skip_all)]
    async fn probe(&self, credentials: &CredentialPair) -> DomainResult<ProbeResult> {
        debug!(endpoint = %self.endpoint, "sending probe request");

        let response = self
            .http_client
            .get(self.endpoint.clone())
            .basic_auth(credentials.api_key(), Some(credentials.api_secret()))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        info!(status = status.as_u16(), body_len = body.len(), "probe response received");

        Ok(ProbeResult::new(status.as_u16(), body))
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

/// Validate that the endpoint is an absolute http or https URL.
pub fn parse_endpoint(endpoint: &str) -> DomainResult<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| ProbeError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ProbeError::InvalidEndpoint(format!(
            "{endpoint}: unsupported scheme '{scheme}'"
        ))),
    }
}
