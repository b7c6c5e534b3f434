//! Client Settings Domain Model
//!
//! Where the quiz server lives and how to talk to it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::request::Endpoint;

/// Base URL of the reference quiz server.
pub const DEFAULT_BASE_URL: &str = "https://127.0.0.1:5050/";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("drivetest/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the quiz client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is resolved against.
    pub base_url: String,
    /// Per-request timeout; `None` waits on the transport's own defaults.
    pub timeout_ms: Option<u64>,
    /// Skip TLS certificate validation (self-signed development servers).
    pub accept_invalid_certs: bool,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            accept_invalid_certs: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates settings for the given base URL with default options.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Enables or disables TLS certificate validation bypass.
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Parses and checks the base URL.
    ///
    /// The path is treated as a directory, so `https://host/api` and
    /// `https://host/api/` resolve endpoints the same way.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL is malformed, is not
    /// `http`/`https`, or cannot carry a path.
    pub fn base(&self) -> DomainResult<Url> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.base_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}': {}",
                url.scheme(),
                self.base_url
            )));
        }
        if url.cannot_be_a_base() {
            return Err(DomainError::InvalidUrl(format!(
                "cannot be used as a base URL: {}",
                self.base_url
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    /// Resolves an endpoint against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the base URL is invalid.
    pub fn endpoint(&self, endpoint: Endpoint) -> DomainResult<Url> {
        self.base()?
            .join(endpoint.path())
            .map_err(|e| DomainError::InvalidUrl(e.to_string()))
    }
}
