//! Entry lifecycle operations.
//!
//! Each operation loads the full list from the injected store, edits it in
//! memory, and writes the full list back. Nothing yields between the load and
//! the write, so a read-modify-write cannot interleave with another one.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{BodyCompError, Result};
use crate::seed::seed_entries;
use crate::storage::{BodyEntry, EntryStore, Measurement};

/// Result of an upsert-by-date save.
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    /// No entry existed for the date; a new one was appended.
    Created(BodyEntry),
    /// An entry for the date existed; its numbers were overwritten.
    Replaced(BodyEntry),
}

impl Saved {
    pub fn entry(&self) -> &BodyEntry {
        match self {
            Saved::Created(entry) | Saved::Replaced(entry) => entry,
        }
    }

    pub fn into_entry(self) -> BodyEntry {
        match self {
            Saved::Created(entry) | Saved::Replaced(entry) => entry,
        }
    }

    pub fn was_replaced(&self) -> bool {
        matches!(self, Saved::Replaced(_))
    }
}

/// Insert a measurement, or overwrite the existing entry for its date.
///
/// An existing entry keeps its `id` and `created_at`; a new entry gets a
/// fresh UUID v7 and `created_at = now`. At most one entry per date exists
/// afterwards.
///
/// # Errors
///
/// Returns `BodyCompError::Storage` if the store write fails.
pub fn save_entry<S: EntryStore + ?Sized>(
    store: &mut S,
    measurement: &Measurement,
) -> Result<Saved> {
    let mut entries = store.load();

    let saved = match entries.iter_mut().find(|e| e.date == measurement.date) {
        Some(existing) => {
            existing.apply(measurement);
            Saved::Replaced(existing.clone())
        }
        None => {
            let entry = BodyEntry::from_measurement(
                Uuid::now_v7().to_string(),
                Utc::now(),
                measurement,
            );
            entries.push(entry.clone());
            Saved::Created(entry)
        }
    };

    store.replace_all(&entries)?;
    debug!(
        id = %saved.entry().id,
        date = %measurement.date,
        replaced = saved.was_replaced(),
        "entry saved"
    );
    Ok(saved)
}

/// Replace the date and numbers of the entry with `id`.
///
/// Moving an entry onto a date owned by a different entry is a conflict and
/// leaves the store untouched. Keeping the entry's own date never conflicts.
///
/// # Errors
///
/// Returns `BodyCompError::NotFound` if no entry has `id`,
/// `BodyCompError::DateConflict` if the new date is taken, or
/// `BodyCompError::Storage` if the store write fails.
pub fn update_entry<S: EntryStore + ?Sized>(
    store: &mut S,
    id: &str,
    measurement: &Measurement,
) -> Result<BodyEntry> {
    let mut entries = store.load();
    let index = entries
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| BodyCompError::NotFound(format!("entry {}", id)))?;

    if entries[index].date != measurement.date
        && entries
            .iter()
            .any(|e| e.id != id && e.date == measurement.date)
    {
        return Err(BodyCompError::DateConflict {
            date: measurement.date,
        });
    }

    entries[index].apply(measurement);
    let updated = entries[index].clone();
    store.replace_all(&entries)?;
    debug!(id = %updated.id, date = %updated.date, "entry updated");
    Ok(updated)
}

/// Remove the entry with `id`.
///
/// # Returns
///
/// `true` if an entry was removed, `false` if none matched (the store is
/// not written in that case).
pub fn delete_entry<S: EntryStore + ?Sized>(store: &mut S, id: &str) -> Result<bool> {
    let mut entries = store.load();
    let before = entries.len();
    entries.retain(|e| e.id != id);
    if entries.len() == before {
        return Ok(false);
    }

    store.replace_all(&entries)?;
    debug!(id = %id, "entry deleted");
    Ok(true)
}

/// Remove every entry. There is no undo.
pub fn clear_all_entries<S: EntryStore + ?Sized>(store: &mut S) -> Result<()> {
    store.clear()?;
    info!("all entries cleared");
    Ok(())
}

/// Replace the store contents with the historical seed dataset.
pub fn reset_to_seed_data<S: EntryStore + ?Sized>(store: &mut S) -> Result<Vec<BodyEntry>> {
    let entries = seed_entries();
    store.replace_all(&entries)?;
    info!(count = entries.len(), "store reset to seed data");
    Ok(entries)
}

/// Seed the store once, only if its slot has never been written.
///
/// Corrupt or unreadable data is never overwritten; the read error is
/// returned instead.
///
/// # Returns
///
/// `Some(entries)` if seeding happened, `None` if the slot already existed.
pub fn seed_if_uninitialized<S: EntryStore + ?Sized>(
    store: &mut S,
) -> Result<Option<Vec<BodyEntry>>> {
    match store.read_slot()? {
        Some(_) => Ok(None),
        None => reset_to_seed_data(store).map(Some),
    }
}
