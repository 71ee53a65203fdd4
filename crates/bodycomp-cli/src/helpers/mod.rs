//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Confirmation and value prompts (`input`)
//! - Date, range, timezone, and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{confirm, resolve_measurement};
pub use parsing::{parse_output_format, parse_range, parse_timezone, today_in, OutputFormat};
