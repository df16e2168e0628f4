//! Error types for decimal format patterns.
//!
//! A pattern is validated once at construction; formatting itself has no
//! runtime failure modes.

use std::collections::HashMap;

use crate::utils::ErrorContext;

/// Represents errors that can occur while compiling a decimal pattern
#[derive(Debug)]
pub enum PatternError {
	/// The pattern does not match `[#0]+ ('.' '0'* '#'*)?` or asks for more
	/// fraction digits than the formatter supports
	InvalidPattern(ErrorContext),
}

impl PatternError {
	/// Creates a new invalid pattern error
	pub fn invalid_pattern(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidPattern(ErrorContext::new(msg.into(), None, metadata))
	}
}

impl std::error::Error for PatternError {}

// Standard error trait implementations
impl std::fmt::Display for PatternError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidPattern(ctx) => write!(f, "Invalid Pattern Error: {}", ctx),
		}
	}
}
