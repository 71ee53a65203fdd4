//! JSON output formatting.

use bodycomp_core::range::fat_percent_domain;
use bodycomp_core::{BodyEntry, ChartPoint, MetricSummary, Summary, TimeRange};

/// Convert an entry to JSON for output, using the persisted field names.
pub fn entry_json(entry: &BodyEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "date": entry.date,
        "bodyWeight": entry.body_weight,
        "skeletalMuscleMass": entry.skeletal_muscle_mass,
        "bodyFatMass": entry.body_fat_mass,
        "bodyFatPercentage": entry.body_fat_percentage,
        "createdAt": entry.created_at,
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[BodyEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

fn card_json(card: &MetricSummary) -> serde_json::Value {
    serde_json::json!({
        "metric": card.metric,
        "title": card.metric.title(),
        "unit": card.metric.unit(),
        "latest": card.latest,
        "delta": card.delta,
        "delta_label": card.delta_label(),
        "verdict": card.verdict,
    })
}

/// Summary cards as JSON.
pub fn summary_json(summary: &Summary) -> serde_json::Value {
    let cards: Vec<serde_json::Value> = summary.cards().into_iter().map(card_json).collect();
    serde_json::json!({
        "latest_date": summary.latest_date,
        "previous_date": summary.previous_date,
        "cards": cards,
    })
}

/// History series as JSON, with the fat-percentage axis bounds.
pub fn history_json(range: TimeRange, points: &[ChartPoint]) -> serde_json::Value {
    let (low, high) = fat_percent_domain(points);
    serde_json::json!({
        "range": range.as_str(),
        "points": points,
        "fat_percent_domain": [low, high],
    })
}
