//! Quiz domain types: tests, answers and verdicts.

mod answer;
mod health;
mod image;
mod payload;
mod record;

pub use answer::{AnswerCheck, AnswerSubmission};
pub use health::HealthStatus;
pub use image::ImageRef;
pub use payload::{AnswerCollection, TestPayload};
pub use record::{Answer, Test};
