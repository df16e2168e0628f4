#![no_main]

use byte_quantity::{parse, ParseOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(input) = std::str::from_utf8(data) {
		for options in [
			ParseOptions::default(),
			ParseOptions::default().with_case_sensitive(true),
			ParseOptions::default().with_prefer_binary_ambiguous(false),
		] {
			if let Ok(quantity) = parse(input, &options) {
				// Anything that parses must be non-negative and re-renderable
				assert!(quantity.as_bytes() >= 0);
				let _ = quantity.to_string();
			}
		}
	}
});
