//! Drivetest Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod settings;

pub use adapters::ReqwestHttpClient;
pub use settings::{ConfigError, ConfigLoader};
