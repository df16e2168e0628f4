//! Human-readable byte-quantity parsing and formatting.
//!
//! This crate converts strings such as `"1234kB"`, `"1234mb"` or `"1234GiB"`
//! into an exact byte count, and renders byte counts back into human-readable
//! strings at a chosen unit and precision. It is the interpretation layer for
//! configuration values (memory limits, disk quotas) entered by humans and
//! for reporting code that displays them.
//!
//! Quantities are always normalized to raw bytes at parse time; the unit a
//! value was written in is never stored. Suffixes without the `i` marker
//! (`"kb"`, `"MB"`) are ambiguous between the binary (1024-based) and decimal
//! (1000-based) families and are resolved by [`ParseOptions`], defaulting to
//! binary.
//!
//! # Examples
//!
//! ```
//! use byte_quantity::{parse, ParseOptions, Unit};
//!
//! let quantity = parse("512MiB", &ParseOptions::default()).unwrap();
//! assert_eq!(quantity.as_bytes(), 512 * 1024 * 1024);
//! assert_eq!(quantity.in_unit(Unit::Kibi), 512 * 1024);
//! assert_eq!(quantity.format_default(Unit::Mebi), "512MiB");
//! ```

pub mod models;
pub mod services;
pub mod utils;

pub use models::{ByteQuantity, Unit, UnitFamily, BINARY_UNITS, DECIMAL_UNITS};
pub use services::formatter::{format, format_default, DecimalFormat, PatternError};
pub use services::parser::{parse, ParseError, ParseOptions};
