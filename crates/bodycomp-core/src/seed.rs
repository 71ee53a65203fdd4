//! Historical scan dataset used to bootstrap an empty tracker.

use chrono::{DateTime, NaiveDate, Utc};

use crate::storage::{BodyEntry, Measurement};

/// (date, weight kg, muscle kg, fat kg, fat %)
const SEED_SCANS: &[(&str, f64, f64, f64, f64)] = &[
    ("2018-07-15", 86.7, 41.6, 14.3, 16.5),
    ("2018-10-15", 87.7, 43.1, 12.9, 14.8),
    ("2019-03-15", 86.9, 42.7, 12.8, 14.7),
    ("2019-05-15", 87.6, 43.8, 11.7, 13.4),
    ("2019-06-15", 87.2, 43.5, 11.8, 13.5),
    ("2019-12-15", 88.8, 44.2, 12.1, 13.6),
    ("2020-10-15", 88.2, 43.2, 13.5, 15.3),
    ("2021-08-15", 85.5, 42.5, 11.6, 13.6),
    ("2023-01-15", 87.0, 44.0, 10.9, 12.5),
    ("2023-06-15", 87.6, 45.0, 9.8, 11.1),
    ("2024-07-15", 83.1, 41.3, 11.1, 13.3),
    ("2024-09-15", 86.7, 44.7, 9.3, 10.7),
    ("2024-11-15", 87.0, 45.6, 8.2, 9.4),
    ("2024-12-15", 88.2, 46.6, 7.4, 8.4),
    ("2025-03-15", 88.4, 46.4, 8.5, 9.7),
    ("2025-10-15", 88.7, 45.8, 9.6, 10.8),
    ("2026-02-15", 87.4, 45.1, 9.4, 10.7),
];

/// Build the seed entries.
///
/// Ids are `seed-<index>` and `created_at` is midnight UTC of the scan date,
/// so repeated seeding produces identical records.
pub fn seed_entries() -> Vec<BodyEntry> {
    SEED_SCANS
        .iter()
        .enumerate()
        .filter_map(|(index, &(date, weight, muscle, fat_mass, fat_percent))| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            let midnight = date.and_hms_opt(0, 0, 0)?;
            let created_at = DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc);
            let measurement = Measurement::new(date, weight, muscle, fat_mass, fat_percent);
            Some(BodyEntry::from_measurement(
                format!("seed-{}", index),
                created_at,
                &measurement,
            ))
        })
        .collect()
}
