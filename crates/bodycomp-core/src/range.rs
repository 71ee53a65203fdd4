//! Time-range filtering and chart series.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BodyCompError;
use crate::storage::BodyEntry;

/// Named window applied before charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::ThreeMonths,
        TimeRange::SixMonths,
        TimeRange::OneYear,
        TimeRange::All,
    ];

    /// Window length in days; `None` is unbounded.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeRange::ThreeMonths => Some(90),
            TimeRange::SixMonths => Some(180),
            TimeRange::OneYear => Some(365),
            TimeRange::All => None,
        }
    }

    /// Short name used on the command line and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ThreeMonths => "3m",
            TimeRange::SixMonths => "6m",
            TimeRange::OneYear => "1y",
            TimeRange::All => "all",
        }
    }

    /// Display label, e.g. `3M`.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ThreeMonths => "3M",
            TimeRange::SixMonths => "6M",
            TimeRange::OneYear => "1Y",
            TimeRange::All => "ALL",
        }
    }

    /// First excluded day: entries must be strictly after this date.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today - Duration::days(days))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = BodyCompError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "3m" => Ok(TimeRange::ThreeMonths),
            "6m" => Ok(TimeRange::SixMonths),
            "1y" => Ok(TimeRange::OneYear),
            "all" => Ok(TimeRange::All),
            other => Err(BodyCompError::InvalidInput(format!(
                "Unknown time range: {} (use 3m, 6m, 1y or all)",
                other
            ))),
        }
    }
}

/// Entries inside `range` as seen from `today`, oldest first.
///
/// Bounded windows keep entries dated strictly after `today - days`.
/// Callers pass the current local date, so the result shifts day to day.
pub fn filter_by_range(
    entries: &[BodyEntry],
    range: TimeRange,
    today: NaiveDate,
) -> Vec<BodyEntry> {
    let cutoff = range.cutoff(today);
    let mut filtered: Vec<BodyEntry> = entries
        .iter()
        .filter(|e| cutoff.map_or(true, |c| e.date > c))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| a.date.cmp(&b.date));
    filtered
}

/// One point of the composition chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub weight: f64,
    pub muscle: f64,
    pub fat_mass: f64,
    pub fat_percent: f64,
    /// Water, bone and organs: weight minus muscle and fat, floored at 0
    pub other: f64,
    pub non_fat: f64,
    pub non_muscle: f64,
}

impl ChartPoint {
    pub fn from_entry(entry: &BodyEntry) -> Self {
        let weight = entry.body_weight;
        let muscle = entry.skeletal_muscle_mass;
        let fat_mass = entry.body_fat_mass;
        Self {
            date: entry.date,
            weight,
            muscle,
            fat_mass,
            fat_percent: entry.body_fat_percentage,
            other: (weight - muscle - fat_mass).max(0.0),
            non_fat: (weight - fat_mass).max(0.0),
            non_muscle: (weight - muscle).max(0.0),
        }
    }
}

/// Chart points for already-filtered entries, in input order.
pub fn chart_series(entries: &[BodyEntry]) -> Vec<ChartPoint> {
    entries.iter().map(ChartPoint::from_entry).collect()
}

/// Axis bounds for the fat-percentage series, padded by one point.
pub fn fat_percent_domain(points: &[ChartPoint]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 20.0);
    }
    let min = points
        .iter()
        .map(|p| p.fat_percent)
        .fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.fat_percent)
        .fold(f64::NEG_INFINITY, f64::max);
    ((min - 1.0).floor().max(0.0), (max + 1.0).ceil())
}
