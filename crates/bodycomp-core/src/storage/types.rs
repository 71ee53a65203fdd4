//! Core data types for the storage layer.
//!
//! Field names serialize in camelCase so the persisted array matches the
//! `body-comp-entries` slot layout used by the web dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BodyCompError, Result};

/// One dated body-composition measurement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyEntry {
    /// Opaque identifier, assigned once and never changed
    pub id: String,

    /// Scan date; at most one entry per date
    pub date: NaiveDate,

    /// Body weight (kg)
    pub body_weight: f64,

    /// Skeletal muscle mass (kg)
    pub skeletal_muscle_mass: f64,

    /// Body fat mass (kg)
    pub body_fat_mass: f64,

    /// Body fat percentage (%)
    pub body_fat_percentage: f64,

    /// When this entry was first created; preserved across edits
    pub created_at: DateTime<Utc>,
}

impl BodyEntry {
    /// Build an entry from a measurement with the given identity.
    pub fn from_measurement(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        measurement: &Measurement,
    ) -> Self {
        Self {
            id: id.into(),
            date: measurement.date,
            body_weight: measurement.body_weight,
            skeletal_muscle_mass: measurement.skeletal_muscle_mass,
            body_fat_mass: measurement.body_fat_mass,
            body_fat_percentage: measurement.body_fat_percentage,
            created_at,
        }
    }

    /// Overwrite the date and the four numeric fields, keeping `id` and `created_at`.
    pub fn apply(&mut self, measurement: &Measurement) {
        self.date = measurement.date;
        self.body_weight = measurement.body_weight;
        self.skeletal_muscle_mass = measurement.skeletal_muscle_mass;
        self.body_fat_mass = measurement.body_fat_mass;
        self.body_fat_percentage = measurement.body_fat_percentage;
    }

    /// The measurement part of this entry (everything but identity).
    pub fn measurement(&self) -> Measurement {
        Measurement {
            date: self.date,
            body_weight: self.body_weight,
            skeletal_muscle_mass: self.skeletal_muscle_mass,
            body_fat_mass: self.body_fat_mass,
            body_fat_percentage: self.body_fat_percentage,
        }
    }
}

/// A fully populated candidate for save or update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub date: NaiveDate,
    pub body_weight: f64,
    pub skeletal_muscle_mass: f64,
    pub body_fat_mass: f64,
    pub body_fat_percentage: f64,
}

impl Measurement {
    pub fn new(
        date: NaiveDate,
        body_weight: f64,
        skeletal_muscle_mass: f64,
        body_fat_mass: f64,
        body_fat_percentage: f64,
    ) -> Self {
        Self {
            date,
            body_weight,
            skeletal_muscle_mass,
            body_fat_mass,
            body_fat_percentage,
        }
    }

    /// Check that every numeric field is finite and strictly positive.
    ///
    /// Lifecycle operations assume this already passed; callers run it
    /// before handing a measurement to the core.
    ///
    /// # Errors
    ///
    /// Returns `BodyCompError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("body weight", self.body_weight),
            ("skeletal muscle mass", self.skeletal_muscle_mass),
            ("body fat mass", self.body_fat_mass),
            ("body fat percentage", self.body_fat_percentage),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(BodyCompError::Validation(format!(
                    "{} must be greater than 0 (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
