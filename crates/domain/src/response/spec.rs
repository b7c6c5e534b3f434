//! Response specification type

use std::borrow::Cow;
use std::time::Duration;

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// HTTP response as seen by the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
    /// Time from sending the request to receiving the full body
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>, duration: Duration) -> Self {
        Self {
            status,
            body,
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Body as UTF-8 text, with invalid sequences replaced.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Response size in bytes.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// Decodes the body as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPayload` if the body is not valid JSON.
    pub fn json(&self) -> DomainResult<Value> {
        serde_json::from_slice(&self.body).map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }
}
