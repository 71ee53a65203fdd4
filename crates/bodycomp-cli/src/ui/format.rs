//! String formatting utilities for UI rendering.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a measurement value with one decimal place.
pub fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format a measurement value with its unit, e.g. `82.0 kg` or `14.6%`.
pub fn format_with_unit(value: f64, unit: &str) -> String {
    if unit == "%" {
        format!("{:.1}%", value)
    } else {
        format!("{:.1} {}", value, unit)
    }
}

/// Format a scan date for display.
///
/// Pretty output spells the month (`15 Jul 2018`); plain output keeps ISO.
pub fn format_date(date: &NaiveDate, pretty: bool) -> String {
    if pretty {
        date.format("%-d %b %Y").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Format a datetime for display.
pub fn format_datetime(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Shorten an entry id for table display.
///
/// Seed ids (`seed-3`) are already short and are returned unchanged.
pub fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        id.to_string()
    } else {
        id.chars().take(8).collect()
    }
}
