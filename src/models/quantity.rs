//! The byte-quantity value object.
//!
//! A [`ByteQuantity`] is an immutable, normalized count of raw bytes. The
//! unit a value was originally written in is resolved at parse time and never
//! stored; conversions back into units happen on demand.
//!
//! Quantities deserialize from either an integer byte count or a
//! human-readable string in the parse grammar, so configuration files can
//! carry `"memory_limit": "512MiB"` directly.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::models::Unit;
use crate::services::formatter::{self, DecimalFormat};
use crate::services::parser::{self, ParseError, ParseOptions};

/// An exact count of bytes.
///
/// Construction does not forbid negative counts, but parsing can never
/// produce one because the grammar has no sign token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteQuantity {
	bytes: i64,
}

impl ByteQuantity {
	/// Wraps an already-normalized byte count.
	pub const fn from_bytes(bytes: i64) -> Self {
		Self { bytes }
	}

	/// Builds a quantity from a count of the given unit.
	///
	/// Returns `None` when the product overflows the signed 64-bit byte
	/// range.
	pub fn from_unit(count: i64, unit: Unit) -> Option<Self> {
		count.checked_mul(unit.multiplier()).map(Self::from_bytes)
	}

	/// Returns the normalized byte count.
	pub const fn as_bytes(self) -> i64 {
		self.bytes
	}

	/// Converts the byte count into the given unit, truncating toward zero.
	///
	/// Rounding is a formatting concern; this conversion never rounds and
	/// never fails.
	pub const fn in_unit(self, unit: Unit) -> i64 {
		self.bytes / unit.multiplier()
	}

	/// Renders the quantity at the given unit using a decimal pattern,
	/// optionally appending the unit's canonical suffix.
	pub fn format(&self, pattern: &DecimalFormat, unit: Unit, append_suffix: bool) -> String {
		formatter::format(self, pattern, unit, append_suffix)
	}

	/// Renders the quantity with the integer-only default pattern and the
	/// unit suffix appended.
	pub fn format_default(&self, unit: Unit) -> String {
		formatter::format_default(self, unit)
	}
}

impl FromStr for ByteQuantity {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parser::parse(s, &ParseOptions::default())
	}
}

impl fmt::Display for ByteQuantity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_default(Unit::One))
	}
}

impl Serialize for ByteQuantity {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_i64(self.bytes)
	}
}

impl<'de> Deserialize<'de> for ByteQuantity {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(ByteQuantityVisitor)
	}
}

struct ByteQuantityVisitor;

impl de::Visitor<'_> for ByteQuantityVisitor {
	type Value = ByteQuantity;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("an integer byte count or a human-readable size string")
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
		Ok(ByteQuantity::from_bytes(value))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
		i64::try_from(value)
			.map(ByteQuantity::from_bytes)
			.map_err(|_| E::custom(format!("byte count {} is out of range", value)))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
		value.parse().map_err(E::custom)
	}
}
