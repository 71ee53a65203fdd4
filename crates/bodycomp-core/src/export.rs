//! Export formats (CSV, JSON).
//!
//! The CSV layout is a fixed contract with spreadsheet imports: header
//! labels, column order and units never change.

use chrono::NaiveDate;

use crate::error::{BodyCompError, Result};
use crate::storage::BodyEntry;

/// CSV header row, in column order.
pub const CSV_HEADERS: [&str; 5] = [
    "Date",
    "Weight (kg)",
    "Muscle Mass (kg)",
    "Body Fat Mass (kg)",
    "Body Fat (%)",
];

/// Default export file name for a given day, e.g. `body-comp-export-2024-03-01.csv`.
pub fn default_filename(today: NaiveDate, extension: &str) -> String {
    format!("body-comp-export-{}.{}", today.format("%Y-%m-%d"), extension)
}

fn sorted_ascending(entries: &[BodyEntry]) -> Vec<&BodyEntry> {
    let mut sorted: Vec<&BodyEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// Render entries as CSV, oldest first.
///
/// Numbers use their shortest round-trip form (`87`, `86.7`).
pub fn to_csv(entries: &[BodyEntry]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for entry in sorted_ascending(entries) {
        writer.write_record([
            entry.date.format("%Y-%m-%d").to_string(),
            entry.body_weight.to_string(),
            entry.skeletal_muscle_mass.to_string(),
            entry.body_fat_mass.to_string(),
            entry.body_fat_percentage.to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| BodyCompError::Storage(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| BodyCompError::Storage(format!("CSV not UTF-8: {}", e)))
}

/// Render entries as a pretty JSON array, oldest first, in the persisted layout.
pub fn to_json(entries: &[BodyEntry]) -> Result<String> {
    serde_json::to_string_pretty(&sorted_ascending(entries))
        .map_err(|e| BodyCompError::Storage(format!("JSON export failed: {}", e)))
}
