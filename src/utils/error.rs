//! Error handling utilities.
//!
//! This module provides a structured approach to error handling with context
//! and metadata. The primary type is [`ErrorContext`], which carries a
//! message, an optional source error and key-value metadata alongside an
//! automatically generated timestamp and trace ID, so a failed parse can be
//! correlated with the configuration value that caused it.

use chrono::Utc;
use std::{collections::HashMap, fmt};
use uuid::Uuid;

/// Contextual payload shared by every typed error in this crate.
///
/// Rendering follows the pattern
/// `message (source) [key=value, ..., timestamp=..., trace_id=...]`, with
/// metadata keys sorted for stable output.
#[derive(Debug)]
pub struct ErrorContext {
	/// The error message
	pub message: String,
	/// The source error that caused this error
	pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	/// Additional metadata about the error
	pub metadata: Option<HashMap<String, String>>,
	/// The timestamp of the error in RFC 3339 format
	pub timestamp: String,
	/// The unique identifier for the error (UUID v4)
	pub trace_id: String,
}

impl ErrorContext {
	/// Creates a new error context with the given message, source and
	/// metadata. Timestamp and trace ID are generated here.
	pub fn new(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self {
			message: message.into(),
			source,
			metadata,
			timestamp: Utc::now().to_rfc3339(),
			trace_id: Uuid::new_v4().to_string(),
		}
	}

	/// Adds a single key-value metadata pair, creating the map if needed.
	pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.metadata
			.get_or_insert_with(HashMap::new)
			.insert(key.into(), value.into());
		self
	}
}

impl fmt::Display for ErrorContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message)?;

		if let Some(source) = &self.source {
			write!(f, " ({})", source)?;
		}

		let mut parts = Vec::new();
		if let Some(metadata) = &self.metadata {
			// Sort keys for consistent output
			let mut keys: Vec<_> = metadata.keys().collect();
			keys.sort();
			for key in keys {
				if let Some(value) = metadata.get(key) {
					parts.push(format!("{}={}", key, value));
				}
			}
		}
		parts.push(format!("timestamp={}", self.timestamp));
		parts.push(format!("trace_id={}", self.trace_id));

		write!(f, " [{}]", parts.join(", "))
	}
}

impl std::error::Error for ErrorContext {}
