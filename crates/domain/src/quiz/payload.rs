//! Wire format of the `/test` response body.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::id::Identifier;

/// Decoded body of a `GET /test` response.
///
/// ```json
/// { "id": 1, "description": "...", "answers": ["a", "b"], "image": null }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestPayload {
    /// Server-assigned test identifier.
    pub id: Identifier,
    /// Question text.
    pub description: String,
    /// Answer options, either a JSON array or a JSON object.
    pub answers: AnswerCollection,
    /// Image reference; a missing field decodes the same as `null`.
    #[serde(default)]
    pub image: Option<String>,
}

/// The `answers` field as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnswerCollection {
    /// `["a", "b"]`: entries in array order.
    Sequence(Vec<Value>),
    /// `{"0": "a", "1": "b"}`: entries in object enumeration order.
    Mapping(Map<String, Value>),
}

impl AnswerCollection {
    /// Number of entries in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(map) => map.len(),
        }
    }

    /// Returns true if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the collection into an ordered sequence of values.
    ///
    /// For objects the order is the natural enumeration order: keys that are
    /// canonical array indices come first in ascending numeric order, then the
    /// remaining keys in the order they appeared in the document.
    #[must_use]
    pub fn into_ordered(self) -> Vec<Value> {
        match self {
            Self::Sequence(items) => items,
            Self::Mapping(map) => {
                let mut indexed = Vec::new();
                let mut named = Vec::new();
                for (key, value) in map {
                    match array_index(&key) {
                        Some(index) => indexed.push((index, value)),
                        None => named.push(value),
                    }
                }
                indexed.sort_by_key(|(index, _)| *index);
                indexed
                    .into_iter()
                    .map(|(_, value)| value)
                    .chain(named)
                    .collect()
            }
        }
    }
}

/// Parses `key` as a canonical array index (`"0"`, `"12"`, but not `"012"` or `"+1"`).
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}
