//! # Bodycomp Core
//!
//! Core library for Bodycomp - a local body-composition tracker for periodic
//! body-scan measurements (weight, skeletal muscle mass, fat mass, fat percentage).
//!
//! This crate provides the data model, storage abstractions, and derived
//! computations independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Entry store trait, data types, JSON file and in-memory backends
//! - **entries**: Entry lifecycle (upsert by date, update, delete, clear, seed)
//! - **metrics**: Latest values, deltas and verdicts for the summary cards
//! - **range**: Time-range filtering and chart series
//! - **export**: CSV and JSON export formats

pub mod entries;
pub mod error;
pub mod export;
pub mod fs;
pub mod metrics;
pub mod range;
pub mod seed;
pub mod storage;

pub use entries::{
    clear_all_entries, delete_entry, reset_to_seed_data, save_entry, seed_if_uninitialized,
    update_entry, Saved,
};
pub use error::{BodyCompError, Result};
pub use metrics::{summarize, Metric, MetricSummary, Summary, Verdict};
pub use range::{chart_series, filter_by_range, ChartPoint, TimeRange};
pub use storage::{BodyEntry, EntryStore, JsonFileStore, Measurement, MemoryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
