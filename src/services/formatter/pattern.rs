//! Decimal format patterns.
//!
//! A small pattern language for rendering unit quotients, modeled on the
//! common decimal-format conventions: `'0'` marks a mandatory fraction digit
//! (padded with zeros), `'#'` an optional one (trailing zeros trimmed).
//! `"#"` renders integers, `"0.00"` renders exactly two fraction digits,
//! `"#.######"` renders up to six.
//!
//! The integer section is validated but carries no grouping or padding
//! semantics; the full integer part of the value is always rendered.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::str::FromStr;

use crate::services::formatter::PatternError;

/// The largest fraction-digit count the decimal backend can honor.
const MAX_FRACTION_DIGITS: u32 = 28;

/// A compiled decimal formatting pattern.
///
/// Values are rounded half-up at the maximum fraction-digit count, then
/// trailing zeros are trimmed down to the minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFormat {
	min_fraction_digits: u32,
	max_fraction_digits: u32,
}

impl DecimalFormat {
	/// The integer-only pattern, equivalent to `"#"`. This is the pattern the
	/// default format uses.
	pub const fn integer() -> Self {
		Self {
			min_fraction_digits: 0,
			max_fraction_digits: 0,
		}
	}

	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// [`PatternError::InvalidPattern`] when the pattern contains characters
	/// other than `#`, `0` and a single `.`, when a section is empty, when a
	/// mandatory `0` follows an optional `#` in the fraction, or when more
	/// than 28 fraction digits are requested.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		let (integer, fraction) = match pattern.split_once('.') {
			Some((integer, fraction)) => (integer, Some(fraction)),
			None => (pattern, None),
		};

		if integer.is_empty() || !integer.chars().all(|c| c == '#' || c == '0') {
			return Err(invalid(pattern, "integer section must be one or more of '#' or '0'"));
		}

		let (min_digits, max_digits) = match fraction {
			None => (0, 0),
			Some(fraction) => {
				let mandatory = fraction.chars().take_while(|c| *c == '0').count();
				let optional = fraction[mandatory..].chars().take_while(|c| *c == '#').count();
				if fraction.is_empty() || mandatory + optional != fraction.chars().count() {
					return Err(invalid(
						pattern,
						"fraction section must be zero or more '0' followed by zero or more '#'",
					));
				}
				(mandatory as u32, (mandatory + optional) as u32)
			}
		};

		if max_digits > MAX_FRACTION_DIGITS {
			return Err(invalid(pattern, "at most 28 fraction digits are supported"));
		}

		Ok(Self {
			min_fraction_digits: min_digits,
			max_fraction_digits: max_digits,
		})
	}

	/// Returns the smallest number of fraction digits the pattern renders.
	pub const fn min_fraction_digits(&self) -> u32 {
		self.min_fraction_digits
	}

	/// Returns the largest number of fraction digits the pattern renders.
	pub const fn max_fraction_digits(&self) -> u32 {
		self.max_fraction_digits
	}

	/// Renders a value: round half-up at the maximum fraction-digit count,
	/// trim trailing zeros down to the minimum, pad with zeros up to it.
	pub fn apply(&self, value: Decimal) -> String {
		let rounded = value
			.round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointAwayFromZero);
		let mut out = if self.max_fraction_digits > self.min_fraction_digits {
			rounded.normalize()
		} else {
			rounded
		};
		if out.scale() < self.min_fraction_digits {
			out.rescale(self.min_fraction_digits);
		}
		out.to_string()
	}
}

fn invalid(pattern: &str, msg: &str) -> PatternError {
	PatternError::invalid_pattern(
		msg,
		Some(HashMap::from([(
			"pattern".to_string(),
			pattern.to_string(),
		)])),
	)
}

impl FromStr for DecimalFormat {
	type Err = PatternError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
