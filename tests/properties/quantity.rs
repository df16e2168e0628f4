use byte_quantity::{parse, ByteQuantity, ParseOptions, UnitFamily, Unit};
use proptest::{prelude::*, test_runner::Config};

use super::strategies::{bytes_with_unit_strategy, count_with_unit_strategy, unit_strategy};

/// Re-parsing formatted output must resolve the suffix in the family it was
/// rendered in; only the ambiguous decimal spellings need the option flipped.
fn reparse_options(unit: Unit) -> ParseOptions {
	let decimal = matches!(unit.family(), Some(UnitFamily::Decimal));
	ParseOptions::default().with_prefer_binary_ambiguous(!decimal)
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_whole_multiples_round_trip_exactly((unit, count) in count_with_unit_strategy()) {
		let quantity = ByteQuantity::from_unit(count, unit).unwrap();
		let rendered = quantity.format_default(unit);
		let reparsed = parse(&rendered, &reparse_options(unit)).unwrap();
		prop_assert_eq!(reparsed.in_unit(unit), count);
		prop_assert_eq!(reparsed.as_bytes(), quantity.as_bytes());
	}

	#[test]
	fn test_arbitrary_bytes_round_trip_within_half_a_unit((unit, bytes) in bytes_with_unit_strategy()) {
		// The default integer format rounds half-up at the unit, so the
		// re-parsed count may differ from the original by at most half a
		// multiplier. This is the documented lossy boundary.
		let multiplier = unit.multiplier() as i128;
		let quantity = ByteQuantity::from_bytes(bytes);
		let rendered = quantity.format_default(unit);
		match parse(&rendered, &reparse_options(unit)) {
			Ok(reparsed) => {
				let diff = (reparsed.as_bytes() as i128 - bytes as i128).abs();
				prop_assert!(diff <= multiplier / 2);
			}
			Err(_) => {
				// Rounding up can push the re-parsed product past i64::MAX
				prop_assert!(bytes as i128 + multiplier / 2 > i64::MAX as i128);
			}
		}
	}

	#[test]
	fn test_truncating_conversion_never_exceeds_the_quotient((unit, bytes) in bytes_with_unit_strategy()) {
		let quantity = ByteQuantity::from_bytes(bytes);
		let count = quantity.in_unit(unit);
		let floor = bytes as i128 / unit.multiplier() as i128;
		prop_assert_eq!(count as i128, floor);
	}

	#[test]
	fn test_parse_never_panics_on_arbitrary_input(input in "\\PC*") {
		let _ = parse(&input, &ParseOptions::default());
		let _ = parse(&input, &ParseOptions::default().with_case_sensitive(true));
	}

	#[test]
	fn test_unit_tokens_parse_case_insensitively(
		count in 0u64..1_000_000,
		rank in 0usize..5,
		with_marker in prop::bool::ANY,
		trailing in prop_oneof![Just(""), Just("b"), Just("B")],
	) {
		let letter = ['k', 'm', 'g', 't', 'p'][rank];
		let marker = if with_marker { "i" } else { "" };
		let lower = format!("{}{}{}{}", count, letter, marker, trailing);
		let upper = format!(
			"{}{}{}{}",
			count,
			letter.to_ascii_uppercase(),
			marker.to_uppercase(),
			trailing
		);

		let options = ParseOptions::default();
		let from_lower = parse(&lower, &options).unwrap();
		let from_upper = parse(&upper, &options).unwrap();
		prop_assert_eq!(from_lower, from_upper);
	}

	#[test]
	fn test_parsing_never_produces_a_negative_quantity((unit, count) in count_with_unit_strategy()) {
		let rendered = format!("{}{}", count, unit.suffix());
		if let Ok(quantity) = parse(&rendered, &ParseOptions::default()) {
			prop_assert!(quantity.as_bytes() >= 0);
		}
	}

	#[test]
	fn test_formatting_is_pure((unit, bytes) in bytes_with_unit_strategy()) {
		let quantity = ByteQuantity::from_bytes(bytes);
		prop_assert_eq!(
			quantity.format_default(unit),
			quantity.format_default(unit)
		);
	}

	#[test]
	fn test_explicit_marker_beats_the_ambiguity_option(count in 0i64..8000, unit in unit_strategy()) {
		// Only exercise binary ranks; the marker never spells a decimal unit
		if matches!(unit.family(), Some(UnitFamily::Binary)) {
			let rendered = format!("{}{}", count, unit.suffix());
			let decimal_preferring =
				ParseOptions::default().with_prefer_binary_ambiguous(false);
			let quantity = parse(&rendered, &decimal_preferring).unwrap();
			prop_assert_eq!(quantity.as_bytes(), count * unit.multiplier());
		}
	}
}
