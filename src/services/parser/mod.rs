//! Human-readable byte-quantity parsing.
//!
//! Turns strings such as `"1234kB"`, `"1234mb"` or `"1234GiB"` into a
//! normalized [`ByteQuantity`]. The grammar over the trimmed input is
//!
//! ```text
//! input       := digits [ unit-token ]
//! digits      := one or more ASCII decimal digits (no sign, no point)
//! unit-token  := [ letter-rank [ 'i' ] ] [ 'b' | 'B' ]
//! letter-rank := one of k, m, g, t, p
//! ```
//!
//! Bare digits count raw bytes. A token with the `i` marker is always the
//! binary-family unit of its rank; a token without it is ambiguous and is
//! resolved by [`ParseOptions::prefer_binary_ambiguous`]. The trailing
//! `b`/`B` is decorative and matched case-insensitively regardless of the
//! case option.

mod error;

pub use error::ParseError;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ByteQuantity, Unit, BINARY_UNITS, DECIMAL_UNITS};

lazy_static! {
	// The whole-input grammar: digits, then an optional alphabetic unit token.
	static ref QUANTITY_RE: Regex = Regex::new(r"^([0-9]+)([A-Za-z]+)?$").unwrap();
}

/// Options controlling how unit tokens are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
	/// When false (the default), rank letters match case-insensitively; when
	/// true, only the canonical `K`/`M`/`G`/`T`/`P` spelling with a lowercase
	/// `i` marker is accepted. The trailing `b`/`B` is exempt either way.
	pub case_sensitive: bool,
	/// Resolves suffixes without the `i` marker (`"kb"`, `"MB"`) to the
	/// binary family when true (the default), the decimal family otherwise.
	pub prefer_binary_ambiguous: bool,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			case_sensitive: false,
			prefer_binary_ambiguous: true,
		}
	}
}

impl ParseOptions {
	/// Sets whether rank letters are matched case-sensitively
	pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
		self.case_sensitive = case_sensitive;
		self
	}

	/// Sets the family used for ambiguous suffixes
	pub fn with_prefer_binary_ambiguous(mut self, prefer_binary: bool) -> Self {
		self.prefer_binary_ambiguous = prefer_binary;
		self
	}
}

/// Parses a human-readable size string into an exact byte count.
///
/// The input is trimmed of surrounding ASCII whitespace and must then match
/// the grammar in the module docs. The result always stores the normalized
/// byte count, never the unit the value was written in.
///
/// # Errors
///
/// - [`ParseError::MalformedInput`] when the grammar does not match, when a
///   rank letter fails the case policy, or when the digit string times the
///   unit multiplier exceeds the signed 64-bit byte range
/// - [`ParseError::UnknownUnit`] when a unit token is present whose letter is
///   not one of k/m/g/t/p
pub fn parse(input: &str, options: &ParseOptions) -> Result<ByteQuantity, ParseError> {
	let trimmed = input.trim();
	let captures = QUANTITY_RE.captures(trimmed).ok_or_else(|| {
		ParseError::malformed_input(
			format!(
				"expected digits followed by an optional unit, got '{}'",
				trimmed
			),
			Some(input_metadata(input)),
		)
	})?;

	let digits = captures
		.get(1)
		.map(|m| m.as_str())
		.unwrap_or_default();
	let unit = match captures.get(2) {
		Some(token) => resolve_unit(token.as_str(), input, options)?,
		None => Unit::One,
	};

	let count: u64 = digits.parse().map_err(|e| {
		ParseError::malformed_input_with_source(
			format!("digit sequence '{}' is out of range", digits),
			e,
			Some(input_metadata(input)),
		)
	})?;

	count
		.checked_mul(unit.multiplier() as u64)
		.and_then(|bytes| i64::try_from(bytes).ok())
		.map(ByteQuantity::from_bytes)
		.ok_or_else(|| {
			ParseError::malformed_input(
				format!("'{}' overflows the representable byte range", trimmed),
				Some(input_metadata(input)),
			)
		})
}

fn input_metadata(input: &str) -> HashMap<String, String> {
	HashMap::from([("input".to_string(), input.to_string())])
}

/// Resolves an alphabetic unit token against the fixed unit tables.
fn resolve_unit(token: &str, input: &str, options: &ParseOptions) -> Result<Unit, ParseError> {
	// The trailing 'b'/'B' is decorative and never case-sensitive
	let stripped = token.strip_suffix(['b', 'B']).unwrap_or(token);

	let mut chars = stripped.chars();
	let letter = match chars.next() {
		Some(letter) => letter,
		// A bare "B" (or "b") counts raw bytes
		None => return Ok(Unit::One),
	};

	let rank = match letter.to_ascii_uppercase() {
		'K' => 1,
		'M' => 2,
		'G' => 3,
		'T' => 4,
		'P' => 5,
		_ => {
			return Err(ParseError::unknown_unit(
				format!("unrecognized unit '{}'", token),
				Some(input_metadata(input)),
			))
		}
	};
	if options.case_sensitive && !letter.is_ascii_uppercase() {
		return Err(ParseError::malformed_input(
			format!("unit '{}' does not match the case-sensitive token set", token),
			Some(input_metadata(input)),
		));
	}

	let binary = match chars.next() {
		Some('i') => true,
		Some('I') if !options.case_sensitive => true,
		Some(other) => {
			return Err(ParseError::malformed_input(
				format!("unexpected character '{}' in unit '{}'", other, token),
				Some(input_metadata(input)),
			))
		}
		None => options.prefer_binary_ambiguous,
	};

	if chars.next().is_some() {
		return Err(ParseError::malformed_input(
			format!("trailing characters in unit '{}'", token),
			Some(input_metadata(input)),
		));
	}

	if binary {
		Ok(BINARY_UNITS[rank])
	} else {
		Ok(DECIMAL_UNITS[rank])
	}
}
