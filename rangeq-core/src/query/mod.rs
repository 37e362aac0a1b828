//! Range query engine
//!
//! This module provides typed query parsing and prefix-table execution

pub mod ast;
pub mod executor;
pub mod parser;

pub use ast::{Answer, RangeQuery, RangeSpec};
pub use executor::{solve, PrefixTables, QueryExecutor};
pub use parser::QueryParser;
