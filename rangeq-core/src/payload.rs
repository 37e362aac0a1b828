//! Wire types for the data source and result sink
//!
//! The data source hands the worker a single JSON document carrying the
//! array, the query list, and an optional session token. Individual query
//! objects stay as raw JSON here; converting them into typed
//! [`RangeQuery`](crate::query::RangeQuery) values is the parser's job, so a
//! single malformed query degrades at its own slot instead of failing the
//! batch.

use crate::query::Answer;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Payload fetched from the data source
#[derive(Debug, Clone, Deserialize)]
pub struct DataPayload {
    /// Session token to adopt for the submission request
    #[serde(default)]
    pub token: Option<String>,
    /// Source array, fixed for the lifetime of the engine
    #[serde(default)]
    pub data: Vec<i64>,
    /// Ordered query list, one raw object per query
    #[serde(default)]
    pub query: Vec<JsonValue>,
}

impl DataPayload {
    /// Parse a payload from a JSON string
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    /// Parse a payload from an already-decoded JSON value
    pub fn from_value(value: JsonValue) -> Result<Self, PayloadError> {
        serde_json::from_value(value).map_err(|e| PayloadError::Malformed(e.to_string()))
    }
}

/// Envelope posted to the result sink
///
/// Each slot is a number for an answered query or `null` for the
/// unsupported-query marker, in the same order as the input query list.
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    /// One slot per input query, in input order
    pub result: Vec<Answer>,
}

impl ResultEnvelope {
    /// Wrap an answer sequence for submission
    pub fn new(result: Vec<Answer>) -> Self {
        Self { result }
    }

    /// Number of slots holding the unsupported marker
    pub fn unsupported_count(&self) -> usize {
        self.result.iter().filter(|a| a.is_unsupported()).count()
    }
}

/// Payload shape errors
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload document itself does not have the expected structure
    /// (non-array `data`, non-integer element, non-array `query`)
    #[error("malformed payload: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let payload = DataPayload::from_json(
            r#"{
                "token": "abc123",
                "data": [1, 2, 3, 4, 5],
                "query": [
                    {"type": "1", "range": [1, 3]},
                    {"type": "2", "range": [0, 4]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.token.as_deref(), Some("abc123"));
        assert_eq!(payload.data, vec![1, 2, 3, 4, 5]);
        assert_eq!(payload.query.len(), 2);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload = DataPayload::from_json("{}").unwrap();
        assert!(payload.token.is_none());
        assert!(payload.data.is_empty());
        assert!(payload.query.is_empty());
    }

    #[test]
    fn test_non_sequence_data_is_rejected() {
        let err = DataPayload::from_json(r#"{"data": "not an array"}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Malformed(_)));
    }

    #[test]
    fn test_non_integer_element_is_rejected() {
        assert!(DataPayload::from_json(r#"{"data": [1, "two", 3]}"#).is_err());
    }

    #[test]
    fn test_non_sequence_query_list_is_rejected() {
        assert!(DataPayload::from_json(r#"{"data": [], "query": 42}"#).is_err());
    }

    #[test]
    fn test_envelope_serialization() {
        let envelope = ResultEnvelope::new(vec![
            Answer::Value(9),
            Answer::Unsupported,
            Answer::Value(-3),
        ]);

        assert_eq!(envelope.unsupported_count(), 1);
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"result":[9,null,-3]}"#
        );
    }
}
