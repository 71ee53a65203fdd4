//! Parsing helpers for dates, ranges, timezones, and output format.

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

use bodycomp_core::TimeRange;

use crate::errors::CliError;

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse a scan date. Only the canonical `YYYY-MM-DD` form is accepted.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    let trimmed = value.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value))
    })?;
    // Reject non-canonical spellings like 2024-1-5 so date keys compare exactly.
    if parsed.format("%Y-%m-%d").to_string() != trimmed {
        return Err(CliError::invalid_input(format!(
            "Invalid date (expected YYYY-MM-DD): {}",
            value
        ))
        .into());
    }
    Ok(parsed)
}

/// Parse a time range name (3m, 6m, 1y, all).
pub fn parse_range(value: &str) -> anyhow::Result<TimeRange> {
    value.parse::<TimeRange>().map_err(|e| {
        CliError::invalid_input_with_hint(e.to_string(), "Hint: Use --range 3m, 6m, 1y or all.")
            .into()
    })
}

/// Parse an IANA timezone name.
pub fn parse_timezone(value: &str) -> anyhow::Result<Tz> {
    value.parse::<Tz>().map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Unknown timezone: {}", value),
            "Hint: Use an IANA name such as Europe/London or America/New_York.",
        )
        .into()
    })
}

/// Today's calendar date in `tz`, or in local time when no timezone is set.
pub fn today_in(tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

/// Parse the `--format` flag.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
