//! Derived metrics for the summary cards.
//!
//! Entries are ordered by date, newest first; the first two drive every
//! card. Dates are unique in the store, so the ordering is total.

use chrono::NaiveDate;
use serde::Serialize;

use crate::storage::BodyEntry;

/// A tracked body-composition quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Weight,
    MuscleMass,
    FatMass,
    FatPercentage,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Weight,
        Metric::MuscleMass,
        Metric::FatMass,
        Metric::FatPercentage,
    ];

    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::MuscleMass => "Muscle mass",
            Metric::FatMass => "Body fat mass",
            Metric::FatPercentage => "Body fat",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::FatPercentage => "%",
            _ => "kg",
        }
    }

    /// Read this quantity from an entry.
    pub fn value(&self, entry: &BodyEntry) -> f64 {
        match self {
            Metric::Weight => entry.body_weight,
            Metric::MuscleMass => entry.skeletal_muscle_mass,
            Metric::FatMass => entry.body_fat_mass,
            Metric::FatPercentage => entry.body_fat_percentage,
        }
    }

    /// Whether a decrease is the desirable direction.
    pub fn inverted(&self) -> bool {
        matches!(self, Metric::FatMass | Metric::FatPercentage)
    }
}

/// Good/bad/neutral reading of a delta's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Good,
    Bad,
    Neutral,
}

/// One summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub latest: Option<f64>,
    pub delta: Option<f64>,
    pub verdict: Verdict,
}

impl MetricSummary {
    /// Delta label as shown on a card, e.g. `+2.0KG VS LAST`.
    pub fn delta_label(&self) -> Option<String> {
        let delta = self.delta?;
        let sign = if delta > 0.0 { "+" } else { "" };
        let unit = match self.metric.unit() {
            "kg" => "KG",
            other => other,
        };
        Some(format!("{}{:.1}{} VS LAST", sign, delta, unit))
    }
}

/// Latest values and deltas for every tracked quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub latest_date: Option<NaiveDate>,
    pub previous_date: Option<NaiveDate>,
    pub weight: MetricSummary,
    pub muscle_mass: MetricSummary,
    pub fat_mass: MetricSummary,
    pub fat_percentage: MetricSummary,
}

impl Summary {
    pub fn get(&self, metric: Metric) -> &MetricSummary {
        match metric {
            Metric::Weight => &self.weight,
            Metric::MuscleMass => &self.muscle_mass,
            Metric::FatMass => &self.fat_mass,
            Metric::FatPercentage => &self.fat_percentage,
        }
    }

    /// Cards in display order.
    pub fn cards(&self) -> [&MetricSummary; 4] {
        [
            &self.weight,
            &self.muscle_mass,
            &self.fat_mass,
            &self.fat_percentage,
        ]
    }
}

/// Compute the summary cards for `entries`.
pub fn summarize(entries: &[BodyEntry]) -> Summary {
    let mut sorted: Vec<&BodyEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    let latest = sorted.first().copied();
    let previous = sorted.get(1).copied();

    let delta_of = |metric: Metric| match (latest, previous) {
        (Some(l), Some(p)) => Some(round_one_decimal(metric.value(l) - metric.value(p))),
        _ => None,
    };
    let muscle_delta = delta_of(Metric::MuscleMass);

    let card = |metric: Metric| {
        let delta = delta_of(metric);
        let verdict = match metric {
            Metric::Weight => weight_verdict(delta, muscle_delta),
            _ => polarity_verdict(delta, metric.inverted()),
        };
        MetricSummary {
            metric,
            latest: latest.map(|e| metric.value(e)),
            delta,
            verdict,
        }
    };

    Summary {
        latest_date: latest.map(|e| e.date),
        previous_date: previous.map(|e| e.date),
        weight: card(Metric::Weight),
        muscle_mass: card(Metric::MuscleMass),
        fat_mass: card(Metric::FatMass),
        fat_percentage: card(Metric::FatPercentage),
    }
}

/// Weight gain only counts as good when muscle mass rose with it.
fn weight_verdict(weight_delta: Option<f64>, muscle_delta: Option<f64>) -> Verdict {
    match weight_delta {
        Some(d) if d > 0.0 => match muscle_delta {
            Some(m) if m > 0.0 => Verdict::Good,
            _ => Verdict::Bad,
        },
        Some(d) if d < 0.0 => Verdict::Bad,
        _ => Verdict::Neutral,
    }
}

fn polarity_verdict(delta: Option<f64>, inverted: bool) -> Verdict {
    match delta {
        Some(d) if d > 0.0 => {
            if inverted {
                Verdict::Bad
            } else {
                Verdict::Good
            }
        }
        Some(d) if d < 0.0 => {
            if inverted {
                Verdict::Good
            } else {
                Verdict::Bad
            }
        }
        _ => Verdict::Neutral,
    }
}

/// Round to one decimal place; negative zero becomes zero.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
