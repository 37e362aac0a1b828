//! Typed range query definitions
//!
//! Queries arrive from the wire as loosely-typed objects; parsing turns them
//! into the tagged variants here so the execution path never branches on
//! strings.

use serde::ser::Serializer;
use serde::Serialize;

/// Inclusive index range `[start, end]` over the source array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    /// First index of the window (inclusive)
    pub start: usize,
    /// Last index of the window (inclusive)
    pub end: usize,
}

impl RangeSpec {
    /// Create a new inclusive range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of elements covered by the range
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Check that the range is well-formed and lies inside an array of `n` elements
    pub fn is_valid_for(&self, n: usize) -> bool {
        self.start <= self.end && self.end < n
    }
}

/// A single range query, tagged by kind
///
/// Unknown wire discriminants and malformed query objects collapse into
/// `Unrecognized` at parse time; execution answers them with the
/// [`Answer::Unsupported`] marker instead of failing the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeQuery {
    /// Sum of all elements in the range
    Sum { range: RangeSpec },
    /// Sum of even-indexed elements minus sum of odd-indexed elements,
    /// parity taken against absolute array indices
    ParityDiff { range: RangeSpec },
    /// Query whose kind or shape was not recognized
    Unrecognized,
}

impl RangeQuery {
    /// Create a sum query over `[start, end]`
    pub fn sum(start: usize, end: usize) -> Self {
        Self::Sum {
            range: RangeSpec::new(start, end),
        }
    }

    /// Create a parity-difference query over `[start, end]`
    pub fn parity_diff(start: usize, end: usize) -> Self {
        Self::ParityDiff {
            range: RangeSpec::new(start, end),
        }
    }

    /// Get the range of a recognized query
    pub fn range(&self) -> Option<RangeSpec> {
        match self {
            Self::Sum { range } | Self::ParityDiff { range } => Some(*range),
            Self::Unrecognized => None,
        }
    }

    /// Check whether the query kind was recognized at parse time
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// One output slot of the result sequence
///
/// `Unsupported` is an explicit marker, distinct from any integer value; it
/// serializes as JSON `null` in the result envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Computed aggregate for a recognized, in-bounds query
    Value(i64),
    /// Marker for an unrecognized kind or an out-of-bounds range
    Unsupported,
}

impl Answer {
    /// Get the integer value, if any
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Unsupported => None,
        }
    }

    /// Check whether this slot holds the marker
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

impl Serialize for Answer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_i64(*v),
            Self::Unsupported => serializer.serialize_none(),
        }
    }
}
