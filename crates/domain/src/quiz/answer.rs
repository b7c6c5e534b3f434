//! Answer submission and the server's verdict.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::Identifier;
use crate::request::{QueryParam, QueryParams};

/// The pair of identifiers sent to `GET /check_answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    /// Test being answered.
    pub test_id: Identifier,
    /// Chosen answer.
    pub answer_id: Identifier,
}

impl AnswerSubmission {
    /// Creates a submission for the given test and answer.
    #[must_use]
    pub fn new(test_id: impl Into<Identifier>, answer_id: impl Into<Identifier>) -> Self {
        Self {
            test_id: test_id.into(),
            answer_id: answer_id.into(),
        }
    }

    /// Query parameters for the check request, `test_id` first.
    #[must_use]
    pub fn to_query(&self) -> QueryParams {
        [
            QueryParam::new("test_id", self.test_id.to_string()),
            QueryParam::new("answer_id", self.answer_id.to_string()),
        ]
        .into_iter()
        .collect()
    }
}

/// Result of checking an answer.
///
/// The server decides the shape of this document, so the raw value is kept.
/// The accessors understand the usual `{"description": ..., "scores": ...}`
/// form and return `None` when a field is absent or has another type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerCheck {
    raw: Value,
}

impl AnswerCheck {
    /// Wraps a decoded response body.
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The decoded response body as received.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Human-readable verdict, e.g. "The answer is correct".
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.raw.get("description").and_then(Value::as_str)
    }

    /// Points awarded for the answer.
    #[must_use]
    pub fn scores(&self) -> Option<u64> {
        self.raw.get("scores").and_then(Value::as_u64)
    }

    /// Whether the answer earned points.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.scores().map(|scores| scores > 0)
    }
}
