//! In-memory entry store.

use super::traits::EntryStore;
use super::types::BodyEntry;
use crate::error::Result;

/// Entry store backed by a process-local slot.
///
/// `None` models an absent slot, matching a file that was never written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<Vec<BodyEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose slot already holds `entries`.
    pub fn with_entries(entries: Vec<BodyEntry>) -> Self {
        Self {
            slot: Some(entries),
        }
    }
}

impl EntryStore for MemoryStore {
    fn read_slot(&self) -> Result<Option<Vec<BodyEntry>>> {
        Ok(self.slot.clone())
    }

    fn replace_all(&mut self, entries: &[BodyEntry]) -> Result<()> {
        self.slot = Some(entries.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_absent() {
        let store = MemoryStore::new();
        assert!(store.read_slot().unwrap().is_none());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_replace_then_clear() {
        let mut store = MemoryStore::new();
        store.replace_all(&[]).unwrap();
        assert_eq!(store.read_slot().unwrap(), Some(Vec::new()));

        store.clear().unwrap();
        assert!(store.read_slot().unwrap().is_none());
    }
}
