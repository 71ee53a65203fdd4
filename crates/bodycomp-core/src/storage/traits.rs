//! Entry store trait definition.
//!
//! The `EntryStore` trait is the only way entries reach durable storage.
//! Lifecycle operations take it as an injected dependency, so a file-backed
//! store and an in-memory fake are interchangeable.

use tracing::warn;

use super::types::BodyEntry;
use crate::error::Result;

/// Storage slot holding the full list of body entries.
///
/// All implementations must ensure:
/// - `replace_all` is atomic: a read sees the old or the new snapshot, never a mix
/// - `clear` leaves the slot absent, so a later read yields no entries
/// - Entries are returned exactly as written; no re-validation happens here
pub trait EntryStore {
    /// Read the slot strictly.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the slot has never been written (or was cleared),
    /// `Ok(Some(entries))` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `BodyCompError::Corrupt` if the stored data does not parse, or
    /// `BodyCompError::Storage` if the slot cannot be read.
    fn read_slot(&self) -> Result<Option<Vec<BodyEntry>>>;

    /// Overwrite the whole collection with `entries`.
    ///
    /// # Errors
    ///
    /// Returns `BodyCompError::Storage` if the write fails. The previous
    /// snapshot stays intact in that case.
    fn replace_all(&mut self, entries: &[BodyEntry]) -> Result<()>;

    /// Remove the slot entirely.
    fn clear(&mut self) -> Result<()>;

    /// Load all entries, failing soft.
    ///
    /// Missing, unreadable and corrupt slots all yield an empty list; callers
    /// treat "no data" and "bad data" identically.
    fn load(&self) -> Vec<BodyEntry> {
        match self.read_slot() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "entry store unreadable; treating as empty");
                Vec::new()
            }
        }
    }
}
