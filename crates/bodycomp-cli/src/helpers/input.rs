//! Input handling helpers for confirmations and measurement values.

use std::io::{self, IsTerminal};

use chrono::NaiveDate;
use dialoguer::{Confirm, Input};

use bodycomp_core::Measurement;

use crate::cli::MeasurementArgs;
use crate::errors::CliError;

use super::parsing::parse_date;

/// Ask the user to confirm a destructive action.
///
/// `--yes` skips the prompt. Without a TTY there is nobody to ask, so the
/// action is refused instead of assumed.
pub fn confirm(prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::invalid_input_with_hint(
            "Confirmation required but no TTY is available",
            "Hint: Pass --yes to confirm non-interactively.",
        )
        .into());
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Merge flags over `base` (the entry being edited, if any) into a complete,
/// validated measurement.
///
/// Missing values are prompted for when `interactive`; otherwise they are an
/// error. A missing date defaults to `base`'s date, then `today`.
pub fn resolve_measurement(
    values: &MeasurementArgs,
    base: Option<&Measurement>,
    today: NaiveDate,
    interactive: bool,
) -> anyhow::Result<Measurement> {
    let date = match values.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => base.map(|b| b.date).unwrap_or(today),
    };

    let body_weight = resolve_value(
        values.weight,
        base.map(|b| b.body_weight),
        "Weight (kg)",
        "--weight",
        interactive,
    )?;
    let skeletal_muscle_mass = resolve_value(
        values.muscle,
        base.map(|b| b.skeletal_muscle_mass),
        "Muscle mass (kg)",
        "--muscle",
        interactive,
    )?;
    let body_fat_mass = resolve_value(
        values.fat_mass,
        base.map(|b| b.body_fat_mass),
        "Body fat mass (kg)",
        "--fat-mass",
        interactive,
    )?;
    let body_fat_percentage = resolve_value(
        values.fat_percent,
        base.map(|b| b.body_fat_percentage),
        "Body fat (%)",
        "--fat-percent",
        interactive,
    )?;

    let measurement = Measurement::new(
        date,
        body_weight,
        skeletal_muscle_mass,
        body_fat_mass,
        body_fat_percentage,
    );
    measurement
        .validate()
        .map_err(|_| CliError::invalid_input("Values must be greater than 0"))?;
    Ok(measurement)
}

fn resolve_value(
    flag: Option<f64>,
    base: Option<f64>,
    prompt: &str,
    flag_name: &str,
    interactive: bool,
) -> anyhow::Result<f64> {
    if let Some(value) = flag.or(base) {
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input_with_hint(
            "All fields are required",
            format!("Hint: Pass {} or run in a TTY to be prompted.", flag_name),
        )
        .into());
    }
    Input::<f64>::new()
        .with_prompt(prompt)
        .validate_with(|value: &f64| -> Result<(), &str> {
            if value.is_finite() && *value > 0.0 {
                Ok(())
            } else {
                Err("Value must be greater than 0")
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", prompt, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn full_args() -> MeasurementArgs {
        MeasurementArgs {
            date: Some("2024-02-01".to_string()),
            weight: Some(82.0),
            muscle: Some(41.0),
            fat_mass: Some(12.0),
            fat_percent: Some(14.6),
        }
    }

    #[test]
    fn test_all_flags_given() {
        let m = resolve_measurement(&full_args(), None, today(), false).unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(m.body_weight, 82.0);
        assert_eq!(m.body_fat_percentage, 14.6);
    }

    #[test]
    fn test_date_defaults_to_today() {
        let args = MeasurementArgs {
            date: None,
            ..full_args()
        };
        let m = resolve_measurement(&args, None, today(), false).unwrap();
        assert_eq!(m.date, today());
    }

    #[test]
    fn test_missing_value_without_tty_is_error() {
        let args = MeasurementArgs {
            muscle: None,
            ..full_args()
        };
        let err = resolve_measurement(&args, None, today(), false).unwrap_err();
        assert!(err.to_string().contains("All fields are required"));
    }

    #[test]
    fn test_non_positive_value_is_rejected() {
        let args = MeasurementArgs {
            fat_mass: Some(0.0),
            ..full_args()
        };
        let err = resolve_measurement(&args, None, today(), false).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_edit_merges_over_base() {
        let base = Measurement::new(today(), 80.0, 40.0, 12.0, 15.0);
        let args = MeasurementArgs {
            weight: Some(79.5),
            ..MeasurementArgs::default()
        };
        let m = resolve_measurement(&args, Some(&base), today(), false).unwrap();
        assert_eq!(m.date, base.date);
        assert_eq!(m.body_weight, 79.5);
        assert_eq!(m.skeletal_muscle_mass, 40.0);
    }
}
