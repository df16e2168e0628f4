//! Error types for byte-quantity parsing.
//!
//! Defines the two ways a size string can fail to parse and provides helper
//! methods for error creation and formatting.

use std::collections::HashMap;

use crate::utils::ErrorContext;

/// Represents errors that can occur while parsing a byte quantity
#[derive(Debug)]
pub enum ParseError {
	/// The input does not match digits followed by an optional unit token,
	/// or the quantity overflows the signed 64-bit byte range
	MalformedInput(ErrorContext),
	/// A unit token is present but its letter is not one of k/m/g/t/p
	UnknownUnit(ErrorContext),
}

impl ParseError {
	/// Creates a new malformed input error
	pub fn malformed_input(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MalformedInput(ErrorContext::new(msg.into(), None, metadata))
	}

	/// Creates a new malformed input error with source
	pub fn malformed_input_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MalformedInput(ErrorContext::new(msg.into(), Some(Box::new(source)), metadata))
	}

	/// Creates a new unknown unit error
	pub fn unknown_unit(msg: impl Into<String>, metadata: Option<HashMap<String, String>>) -> Self {
		Self::UnknownUnit(ErrorContext::new(msg.into(), None, metadata))
	}

	/// Creates a new unknown unit error with source
	pub fn unknown_unit_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnknownUnit(ErrorContext::new(msg.into(), Some(Box::new(source)), metadata))
	}
}

impl std::error::Error for ParseError {}

// Standard error trait implementations
impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MalformedInput(ctx) => write!(f, "Malformed Input Error: {}", ctx),
			Self::UnknownUnit(ctx) => write!(f, "Unknown Unit Error: {}", ctx),
		}
	}
}
