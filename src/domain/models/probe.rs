//! Result of a single probe.

use serde::Serialize;

/// Number of body characters shown when printing a probe result.
pub const DEFAULT_BODY_LIMIT: usize = 500;

/// Outcome of a single probe: whatever status and body the API returned.
///
/// Any HTTP status is a valid result; a 401 is reported exactly like a 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// HTTP status code
    pub status: u16,
    /// Full response body as text
    pub body: String,
}

impl ProbeResult {
    /// Wrap a status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body cut to its first `limit` characters, with no marker appended.
    ///
    /// Counts Unicode scalar values rather than bytes, so multi-byte text is
    /// never split inside a character.
    pub fn truncated_body(&self, limit: usize) -> &str {
        match self.body.char_indices().nth(limit) {
            Some((byte_idx, _)) => &self.body[..byte_idx],
            None => &self.body,
        }
    }
}
