//! Query parser for converting raw JSON query objects to typed queries
//!
//! The data source sends queries as loose JSON objects with a string `type`
//! discriminant and a two-element `range` pair. Parsing is total: anything
//! that does not match a recognized shape becomes [`RangeQuery::Unrecognized`]
//! so the rest of the batch is unaffected.

use super::ast::{RangeQuery, RangeSpec};
use serde_json::Value as JsonValue;

/// Wire discriminant for sum queries
const KIND_SUM: &str = "1";
/// Wire discriminant for parity-difference queries
const KIND_PARITY_DIFF: &str = "2";

/// Query parser for raw JSON query objects
pub struct QueryParser;

impl QueryParser {
    /// Parse a single raw query object
    ///
    /// Returns `Unrecognized` for unknown discriminants, missing fields, and
    /// ranges that are not a pair of non-negative integers.
    pub fn parse_from_value(value: &JsonValue) -> RangeQuery {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return RangeQuery::Unrecognized,
        };

        let range = match obj.get("range").and_then(Self::parse_range) {
            Some(range) => range,
            None => return RangeQuery::Unrecognized,
        };

        match obj.get("type").and_then(JsonValue::as_str) {
            Some(KIND_SUM) => RangeQuery::Sum { range },
            Some(KIND_PARITY_DIFF) => RangeQuery::ParityDiff { range },
            _ => RangeQuery::Unrecognized,
        }
    }

    /// Parse an ordered batch of raw query objects, preserving order
    pub fn parse_batch(values: &[JsonValue]) -> Vec<RangeQuery> {
        values.iter().map(Self::parse_from_value).collect()
    }

    /// Extract an index pair from a `range` value
    ///
    /// The pair must be exactly two non-negative integers; whether the pair
    /// fits the array is checked at execution time, where the array length is
    /// known.
    fn parse_range(value: &JsonValue) -> Option<RangeSpec> {
        let pair = value.as_array()?;
        if pair.len() != 2 {
            return None;
        }

        let start = pair[0].as_u64()?;
        let end = pair[1].as_u64()?;

        Some(RangeSpec::new(start as usize, end as usize))
    }
}
