//! Illustration attached to a test.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Reference to the image illustrating a test.
///
/// The value is kept exactly as the server sent it. Depending on the server
/// it is either a URL or the image file itself, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wraps a raw image reference.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the reference exactly as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the reference as an absolute `http`/`https` URL.
    #[must_use]
    pub fn as_url(&self) -> Option<Url> {
        Url::parse(&self.0)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }

    /// Decodes inline image data.
    ///
    /// Accepts plain base64 (line breaks allowed) and `data:<mime>;base64,` URLs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidImage` if the reference is not base64 data.
    pub fn decode_base64(&self) -> DomainResult<Vec<u8>> {
        let encoded = self
            .0
            .split_once(";base64,")
            .filter(|(prefix, _)| prefix.starts_with("data:"))
            .map_or(self.0.as_str(), |(_, data)| data);

        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        STANDARD
            .decode(compact)
            .map_err(|e| DomainError::InvalidImage(e.to_string()))
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
