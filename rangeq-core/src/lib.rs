//! RangeQ Core - Range query engine and wire types
//!
//! This crate provides the computational core of the RangeQ worker:
//! - Typed range queries over an immutable integer array
//! - Prefix-table precomputation for O(1) range aggregates
//! - Payload wire types for the data source and result sink

pub mod payload;
pub mod query;

pub use payload::*;
pub use query::*;
