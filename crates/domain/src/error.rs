//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The decoded payload does not have the expected shape.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The provided URL is invalid or cannot be used as an endpoint base.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Query parameters could not be encoded.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The image reference is not valid base64 data.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
