//! Byte-quantity command-line front end.
//!
//! This binary drives the library the way its two kinds of callers do:
//! `parse` interprets a human-entered size string the way a configuration
//! loader would, and `format` renders a byte count back the way reporting
//! code would.

use std::error::Error;

use byte_quantity::utils::setup_logging;
use byte_quantity::{parse, ByteQuantity, DecimalFormat, ParseOptions, Unit};
use clap::{Parser, Subcommand};
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "byte-quantity", version)]
#[command(about = "Parse and format human-readable byte quantities")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Parse a size string such as "512MiB" or "1234kB" into a byte count
	Parse {
		/// The size string to interpret
		input: String,
		/// Resolve ambiguous suffixes ("kb", "MB") as decimal instead of
		/// binary
		#[arg(long)]
		decimal: bool,
		/// Require the canonical letter case in unit tokens
		#[arg(long)]
		case_sensitive: bool,
		/// Report the count in this unit (truncating) instead of raw bytes
		#[arg(long = "in", value_name = "UNIT")]
		in_unit: Option<Unit>,
		/// Emit the result as JSON
		#[arg(long)]
		json: bool,
	},
	/// Format a byte count as a human-readable string
	Format {
		/// The byte count to render
		#[arg(allow_negative_numbers = true)]
		bytes: i64,
		/// Unit to render at, by canonical suffix: B, KiB..PiB, kB, MB..PB
		#[arg(long, default_value = "B")]
		unit: Unit,
		/// Decimal pattern such as "#.##" or "0.000"; integers when omitted
		#[arg(long)]
		pattern: Option<String>,
		/// Omit the unit suffix
		#[arg(long)]
		no_suffix: bool,
	},
}

fn main() -> Result<()> {
	setup_logging();
	let cli = Cli::parse();

	match cli.command {
		Command::Parse {
			input,
			decimal,
			case_sensitive,
			in_unit,
			json,
		} => {
			let options = ParseOptions::default()
				.with_case_sensitive(case_sensitive)
				.with_prefer_binary_ambiguous(!decimal);
			debug!(input = %input, ?options, "parsing quantity");

			let quantity = parse(&input, &options)?;
			let count = match in_unit {
				Some(unit) => quantity.in_unit(unit),
				None => quantity.as_bytes(),
			};
			if json {
				println!(
					"{}",
					serde_json::json!({
						"input": input,
						"bytes": quantity.as_bytes(),
						"count": count,
					})
				);
			} else {
				println!("{}", count);
			}
		}
		Command::Format {
			bytes,
			unit,
			pattern,
			no_suffix,
		} => {
			let pattern = match pattern {
				Some(pattern) => pattern.parse::<DecimalFormat>()?,
				None => DecimalFormat::integer(),
			};
			debug!(bytes, unit = %unit, "formatting quantity");

			let quantity = ByteQuantity::from_bytes(bytes);
			println!("{}", quantity.format(&pattern, unit, !no_suffix));
		}
	}

	Ok(())
}
