//! The immutable test record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::ImageRef;
use super::payload::TestPayload;
use crate::error::{DomainError, DomainResult};
use crate::id::Identifier;

/// One answer option. Its internal shape is defined by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(Value);

impl Answer {
    /// Returns the raw JSON value of this answer.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Returns the answer text when the entry is a plain string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl From<Value> for Answer {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

/// A quiz test as served by `GET /test`.
///
/// Read-only once built: all fields are private and only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Test {
    id: Identifier,
    description: String,
    answers: Vec<Answer>,
    image: Option<ImageRef>,
}

impl Test {
    /// Builds a record from an already decoded payload.
    #[must_use]
    pub fn from_payload(payload: TestPayload) -> Self {
        Self {
            id: payload.id,
            description: payload.description,
            answers: payload
                .answers
                .into_ordered()
                .into_iter()
                .map(Answer::from)
                .collect(),
            image: payload.image.map(ImageRef::from),
        }
    }

    /// Validates a JSON value against the payload shape and builds a record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPayload` if a required field is missing or
    /// has the wrong type.
    pub fn from_json_value(value: Value) -> DomainResult<Self> {
        serde_json::from_value::<TestPayload>(value)
            .map(Self::from_payload)
            .map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }

    /// Decodes a JSON document and builds a record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPayload` if the bytes are not JSON or do
    /// not match the payload shape.
    pub fn from_json_slice(bytes: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice::<TestPayload>(bytes)
            .map(Self::from_payload)
            .map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }

    /// Server-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &Identifier {
        &self.id
    }

    /// Question text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Answer options in server order.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Optional illustration.
    #[must_use]
    pub const fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}
