//! Human-readable byte-quantity formatting.
//!
//! Renders a [`ByteQuantity`] at a chosen unit and precision. Unlike the
//! truncating [`ByteQuantity::in_unit`] conversion, formatting computes the
//! real-valued quotient and rounds it half-up through the caller's
//! [`DecimalFormat`] pattern, so `1234567890` bytes at kilo render as
//! `"1234568kB"`.

mod error;
mod pattern;

pub use error::PatternError;
pub use pattern::DecimalFormat;

use rust_decimal::Decimal;

use crate::models::{ByteQuantity, Unit};

/// Renders a quantity at the given unit through a decimal pattern.
///
/// The quotient is computed exactly (no truncation) before the pattern's
/// rounding is applied. When `append_suffix` is true the unit's canonical
/// suffix is appended: the `iB` spelling for binary ranks, the single letter
/// plus `B` for decimal ranks, plain `B` for raw bytes.
pub fn format(
	quantity: &ByteQuantity,
	pattern: &DecimalFormat,
	unit: Unit,
	append_suffix: bool,
) -> String {
	let quotient = Decimal::from(quantity.as_bytes()) / Decimal::from(unit.multiplier());
	let mut rendered = pattern.apply(quotient);
	if append_suffix {
		rendered.push_str(unit.suffix());
	}
	rendered
}

/// Renders a quantity with the integer-only default pattern and the suffix
/// appended. This is the quick human display used by reporting code.
pub fn format_default(quantity: &ByteQuantity, unit: Unit) -> String {
	format(quantity, &DecimalFormat::integer(), unit, true)
}
