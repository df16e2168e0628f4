//! Byte-quantity units.
//!
//! Defines the fixed table of scale factors a quantity can be expressed in,
//! spanning two families: binary (base 1024) and decimal (base 1000). The
//! table is a process-wide constant; there is no mechanism for registering
//! custom units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scale family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitFamily {
	/// Powers of 1024 (`KiB`, `MiB`, ...)
	Binary,
	/// Powers of 1000 (`kB`, `MB`, ...)
	Decimal,
}

/// A fixed byte-quantity scale factor.
///
/// Each unit multiplies a count by `base^rank`, where the base is 1024 for
/// the binary family and 1000 for the decimal family and the rank is the
/// exponent tier (0 through 5) shared by the two members of each letter.
/// [`Unit::One`] is rank 0 with multiplier 1 and is shared by both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
	/// Raw bytes, shared by both families
	One,
	/// 1024^1 bytes
	Kibi,
	/// 1024^2 bytes
	Mebi,
	/// 1024^3 bytes
	Gibi,
	/// 1024^4 bytes
	Tebi,
	/// 1024^5 bytes
	Pebi,
	/// 1000^1 bytes
	Kilo,
	/// 1000^2 bytes
	Mega,
	/// 1000^3 bytes
	Giga,
	/// 1000^4 bytes
	Tera,
	/// 1000^5 bytes
	Peta,
}

/// Binary-family units indexed by rank.
pub const BINARY_UNITS: [Unit; 6] = [
	Unit::One,
	Unit::Kibi,
	Unit::Mebi,
	Unit::Gibi,
	Unit::Tebi,
	Unit::Pebi,
];

/// Decimal-family units indexed by rank.
pub const DECIMAL_UNITS: [Unit; 6] = [
	Unit::One,
	Unit::Kilo,
	Unit::Mega,
	Unit::Giga,
	Unit::Tera,
	Unit::Peta,
];

impl Unit {
	/// Returns the number of bytes one count of this unit stands for.
	pub const fn multiplier(self) -> i64 {
		match self {
			Unit::One => 1,
			Unit::Kibi => 1 << 10,
			Unit::Mebi => 1 << 20,
			Unit::Gibi => 1 << 30,
			Unit::Tebi => 1 << 40,
			Unit::Pebi => 1 << 50,
			Unit::Kilo => 1_000,
			Unit::Mega => 1_000_000,
			Unit::Giga => 1_000_000_000,
			Unit::Tera => 1_000_000_000_000,
			Unit::Peta => 1_000_000_000_000_000,
		}
	}

	/// Returns the exponent tier of this unit within its family.
	pub const fn rank(self) -> usize {
		match self {
			Unit::One => 0,
			Unit::Kibi | Unit::Kilo => 1,
			Unit::Mebi | Unit::Mega => 2,
			Unit::Gibi | Unit::Giga => 3,
			Unit::Tebi | Unit::Tera => 4,
			Unit::Pebi | Unit::Peta => 5,
		}
	}

	/// Returns the family this unit belongs to, or `None` for [`Unit::One`],
	/// which both families share.
	pub const fn family(self) -> Option<UnitFamily> {
		match self {
			Unit::One => None,
			Unit::Kibi | Unit::Mebi | Unit::Gibi | Unit::Tebi | Unit::Pebi => {
				Some(UnitFamily::Binary)
			}
			Unit::Kilo | Unit::Mega | Unit::Giga | Unit::Tera | Unit::Peta => {
				Some(UnitFamily::Decimal)
			}
		}
	}

	/// Returns the canonical suffix: the `iB` spelling for binary ranks, the
	/// single letter plus `B` for decimal ranks, and plain `B` for raw bytes.
	pub const fn suffix(self) -> &'static str {
		match self {
			Unit::One => "B",
			Unit::Kibi => "KiB",
			Unit::Mebi => "MiB",
			Unit::Gibi => "GiB",
			Unit::Tebi => "TiB",
			Unit::Pebi => "PiB",
			Unit::Kilo => "kB",
			Unit::Mega => "MB",
			Unit::Giga => "GB",
			Unit::Tera => "TB",
			Unit::Peta => "PB",
		}
	}

	/// Looks a unit up by its canonical suffix.
	///
	/// Matching is exact: `"KiB"` names the binary rank, `"kB"`/`"MB"` the
	/// decimal rank. The option-driven resolution of ambiguous spellings such
	/// as `"mb"` belongs to the parser, not to this table.
	pub fn from_suffix(suffix: &str) -> Option<Unit> {
		BINARY_UNITS
			.iter()
			.chain(DECIMAL_UNITS.iter())
			.copied()
			.find(|unit| unit.suffix() == suffix)
	}
}

impl fmt::Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.suffix())
	}
}

impl std::str::FromStr for Unit {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Unit::from_suffix(s).ok_or_else(|| {
			format!(
				"unknown unit '{}', expected one of B, KiB..PiB or kB, MB..PB",
				s
			)
		})
	}
}
