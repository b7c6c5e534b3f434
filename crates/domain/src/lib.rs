//! Drivetest Domain - Core quiz types
//!
//! This crate defines the domain model for the Drivetest quiz client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod id;
pub mod quiz;
pub mod request;
pub mod response;
pub mod settings;

pub use error::{DomainError, DomainResult};
pub use id::Identifier;
pub use quiz::{
    Answer, AnswerCheck, AnswerCollection, AnswerSubmission, HealthStatus, ImageRef, Test,
    TestPayload,
};
pub use settings::ClientConfig;
