//! Logging utilities.
//!
//! This module sets up logging for the command-line front end using the
//! `tracing_subscriber` crate. Diagnostics go to stderr so that parsed and
//! formatted values on stdout stay machine-readable.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Setup logging for the command-line front end.
///
/// The filter is taken from the standard environment variable and defaults
/// to INFO.
pub fn setup_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let subscriber = tracing_subscriber::registry().with(filter).with(
		fmt::layer().with_writer(std::io::stderr).event_format(
			fmt::format()
				.with_level(true)
				.with_target(false)
				.with_ansi(true)
				.compact(),
		),
	);

	// Try to set the subscriber, but don't panic if one is already set
	let _ = subscriber.try_init();
}
