use byte_quantity::{format, format_default, ByteQuantity, DecimalFormat, Unit};

const REFERENCE: i64 = 1_234_567_890;

#[test]
fn test_default_format_renders_raw_bytes() {
	let quantity = ByteQuantity::from_bytes(REFERENCE);
	assert_eq!(format_default(&quantity, Unit::One), "1234567890B");
}

#[test]
fn test_default_format_rounds_half_up() {
	let quantity = ByteQuantity::from_bytes(REFERENCE);
	assert_eq!(format_default(&quantity, Unit::Kilo), "1234568kB");
}

#[test]
fn test_default_format_below_one_unit_is_zero() {
	let quantity = ByteQuantity::from_bytes(REFERENCE);
	assert_eq!(format_default(&quantity, Unit::Peta), "0PB");
}

#[test]
fn test_fractional_pattern_renders_without_suffix() {
	let quantity = ByteQuantity::from_bytes(REFERENCE);
	let pattern = "#.######".parse::<DecimalFormat>().unwrap();
	assert_eq!(format(&quantity, &pattern, Unit::Giga, false), "1.234568");
}

#[test]
fn test_method_and_free_function_agree() {
	let quantity = ByteQuantity::from_bytes(REFERENCE);
	let pattern = DecimalFormat::new("0.0").unwrap();
	assert_eq!(
		quantity.format(&pattern, Unit::Mebi, true),
		format(&quantity, &pattern, Unit::Mebi, true)
	);
	assert_eq!(
		quantity.format_default(Unit::Kibi),
		format_default(&quantity, Unit::Kibi)
	);
}

#[test]
fn test_formatting_reports_each_family_suffix() {
	let quantity = ByteQuantity::from_unit(2, Unit::Gibi).unwrap();
	assert_eq!(format_default(&quantity, Unit::Gibi), "2GiB");
	let quantity = ByteQuantity::from_unit(2, Unit::Giga).unwrap();
	assert_eq!(format_default(&quantity, Unit::Giga), "2GB");
}

#[test]
fn test_formatted_output_reparses_at_the_same_unit() {
	// The default integer format loses at most half a unit; a value that is
	// a whole number of units survives the round trip exactly
	let quantity = ByteQuantity::from_unit(1234, Unit::Mebi).unwrap();
	let rendered = format_default(&quantity, Unit::Mebi);
	let reparsed: ByteQuantity = rendered.parse().unwrap();
	assert_eq!(reparsed, quantity);
}
