//! Service modules implementing the crate's two operations.
//!
//! - parser: human-readable size string to normalized quantity
//! - formatter: normalized quantity to human-readable string

pub mod formatter;
pub mod parser;
