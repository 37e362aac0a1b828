//! Query executor backed by prefix tables
//!
//! Builds three prefix tables over the source array in one linear pass, then
//! answers each range query in O(1). The executor is immutable once built and
//! safe to share read-only across threads.

use super::ast::{Answer, RangeQuery, RangeSpec};

/// Prefix sums over the source array
///
/// Each table has length n+1 with index 0 holding zero: `total[i]` is the sum
/// of `array[0..i)`, `even[i]` and `odd[i]` the sums restricted to even and
/// odd absolute indices within the same prefix. All accumulation is 64-bit.
#[derive(Debug, Clone)]
pub struct PrefixTables {
    total: Vec<i64>,
    even: Vec<i64>,
    odd: Vec<i64>,
}

impl PrefixTables {
    /// Build the tables in a single pass over the array
    pub fn build(array: &[i64]) -> Self {
        let n = array.len();
        let mut total = vec![0i64; n + 1];
        let mut even = vec![0i64; n + 1];
        let mut odd = vec![0i64; n + 1];

        for (i, &value) in array.iter().enumerate() {
            total[i + 1] = total[i] + value;
            if i % 2 == 0 {
                even[i + 1] = even[i] + value;
                odd[i + 1] = odd[i];
            } else {
                even[i + 1] = even[i];
                odd[i + 1] = odd[i] + value;
            }
            debug_assert_eq!(total[i + 1], even[i + 1] + odd[i + 1]);
        }

        Self { total, even, odd }
    }

    /// Length of the source array the tables were built from
    pub fn source_len(&self) -> usize {
        self.total.len() - 1
    }

    /// Sum of the elements in `range`
    ///
    /// `range` must satisfy [`RangeSpec::is_valid_for`] the source length.
    pub fn range_sum(&self, range: RangeSpec) -> i64 {
        debug_assert!(range.is_valid_for(self.source_len()));
        self.total[range.end + 1] - self.total[range.start]
    }

    /// Even-indexed sum minus odd-indexed sum within `range`
    ///
    /// Parity is the element's absolute index in the source array. `range`
    /// must satisfy [`RangeSpec::is_valid_for`] the source length.
    pub fn parity_diff(&self, range: RangeSpec) -> i64 {
        debug_assert!(range.is_valid_for(self.source_len()));
        let even = self.even[range.end + 1] - self.even[range.start];
        let odd = self.odd[range.end + 1] - self.odd[range.start];
        even - odd
    }
}

/// Query executor over an immutable array
pub struct QueryExecutor {
    array: Vec<i64>,
    tables: PrefixTables,
}

impl QueryExecutor {
    /// Take ownership of the array and precompute its prefix tables
    pub fn new(array: Vec<i64>) -> Self {
        let tables = PrefixTables::build(&array);
        Self { array, tables }
    }

    /// Length of the source array
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Check whether the source array is empty
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// The source array
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// Answer a single query
    ///
    /// Unrecognized kinds and ranges that are inverted or fall outside the
    /// array answer with the marker; the executor never reads out of bounds
    /// and never clamps.
    pub fn answer(&self, query: &RangeQuery) -> Answer {
        let range = match query.range() {
            Some(range) if range.is_valid_for(self.len()) => range,
            _ => return Answer::Unsupported,
        };

        match query {
            RangeQuery::Sum { .. } => Answer::Value(self.tables.range_sum(range)),
            RangeQuery::ParityDiff { .. } => Answer::Value(self.tables.parity_diff(range)),
            RangeQuery::Unrecognized => Answer::Unsupported,
        }
    }

    /// Answer an ordered batch of queries, one slot per query in input order
    pub fn answer_all(&self, queries: &[RangeQuery]) -> Vec<Answer> {
        queries.iter().map(|query| self.answer(query)).collect()
    }
}

/// Build the tables once and answer every query in input order
///
/// Total cost is O(n + q); no query fails fatally.
pub fn solve(array: Vec<i64>, queries: &[RangeQuery]) -> Vec<Answer> {
    QueryExecutor::new(array).answer_all(queries)
}
