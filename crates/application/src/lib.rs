//! Drivetest Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod testing;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpClient, HttpClientError, HttpFuture};
pub use use_cases::{CheckAnswer, FetchTest, HealthCheck};
