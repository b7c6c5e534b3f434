//! Server liveness report.

use serde::Serialize;
use serde_json::Value;

/// Message returned by `GET /healthy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    /// The server's self-description, e.g. "Drive-tests is working and healthy".
    pub message: String,
}

impl HealthStatus {
    /// Builds the status from a decoded body. Non-string bodies are kept as JSON text.
    #[must_use]
    pub fn from_json_value(value: Value) -> Self {
        let message = match value {
            Value::String(message) => message,
            other => other.to_string(),
        };
        Self { message }
    }
}
