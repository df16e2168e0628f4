//! Utility modules for common functionality.
//!
//! This module provides utility types shared across the crate. Currently
//! includes:
//!
//! - error: structured error context attached to every typed failure
//! - logging: tracing subscriber setup for the command-line front end

mod error;
mod logging;

pub use error::*;
pub use logging::*;
