//! The API key/secret pair.

use std::fmt;

/// API key/secret pair used as HTTP Basic Authentication.
///
/// Both values are guaranteed non-empty once constructed. The pair is only
/// held for the lifetime of a single probe and its `Debug` output never
/// reveals either value.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    api_key: String,
    api_secret: String,
}

impl CredentialPair {
    /// Build a pair, returning `None` if either value is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Option<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return None;
        }
        Some(Self {
            api_key,
            api_secret,
        })
    }

    /// Basic Auth username.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Basic Auth password.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
