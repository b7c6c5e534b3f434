//! Application error types

use drivetest_domain::{DomainError, request::Endpoint};
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status} for {endpoint}: {body}")]
    UnexpectedStatus {
        /// Endpoint that was called.
        endpoint: Endpoint,
        /// Status code received.
        status: u16,
        /// Start of the response body.
        body: String,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
