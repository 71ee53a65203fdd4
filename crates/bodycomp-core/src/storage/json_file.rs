//! JSON file entry store.
//!
//! The whole collection lives in one JSON array on disk. Writes go through
//! a temp file and an atomic rename, so a crash mid-write leaves the previous
//! snapshot in place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::traits::EntryStore;
use super::types::BodyEntry;
use crate::error::{BodyCompError, Result};

/// Entry store persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl EntryStore for JsonFileStore {
    fn read_slot(&self) -> Result<Option<Vec<BodyEntry>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(BodyCompError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };
        let entries: Vec<BodyEntry> = serde_json::from_str(&contents).map_err(|e| {
            BodyCompError::Corrupt(format!("{} ({})", e, self.path.display()))
        })?;
        Ok(Some(entries))
    }

    fn replace_all(&mut self, entries: &[BodyEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    BodyCompError::Storage(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let payload = serde_json::to_vec_pretty(entries)
            .map_err(|e| BodyCompError::Storage(format!("Serialization failed: {}", e)))?;
        crate::fs::write_atomic(&self.path, &payload).map_err(|e| {
            BodyCompError::Storage(format!("Write to {} failed: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = entries.len(), "entry store written");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "entry store cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(BodyCompError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_absent_slot() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("entries.json"));
        assert!(!store.exists());
        assert!(store.read_slot().unwrap().is_none());
    }

    #[test]
    fn test_replace_all_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("entries.json"));
        store.replace_all(&[]).unwrap();
        assert_eq!(store.read_slot().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_corrupt_file_is_an_error_but_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "{not an array").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read_slot(), Err(BodyCompError::Corrupt(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("entries.json"));
        store.clear().unwrap();
    }
}
