//! Entry repository for JSON storage
//!
//! Manages loading and saving spend entries to entries.json. The store is an
//! opaque blob of raw entries to the core: aggregation always re-reads the
//! full list and derives everything fresh.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{SpendError, SpendResult};
use crate::models::SpendEntry;

use super::file_io::{read_json, write_json_atomic};

/// Serializable entry data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<SpendEntry>,
}

/// Repository for spend entry persistence
pub struct EntryStore {
    path: PathBuf,
    data: RwLock<Vec<SpendEntry>>,
}

impl EntryStore {
    /// Create a new entry store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk. A missing file is an empty store, not an
    /// error.
    pub fn load(&self) -> SpendResult<()> {
        let file_data: EntryData = read_json(&self.path)?;

        let mut data = self.write_lock()?;
        *data = file_data.entries;
        Ok(())
    }

    /// Save all entries to disk, replacing prior contents
    pub fn save(&self) -> SpendResult<()> {
        let data = self.read_lock()?;
        let file_data = EntryData {
            entries: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a copy of all entries
    pub fn get_all(&self) -> SpendResult<Vec<SpendEntry>> {
        Ok(self.read_lock()?.clone())
    }

    /// Number of stored entries
    pub fn len(&self) -> SpendResult<usize> {
        Ok(self.read_lock()?.len())
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> SpendResult<bool> {
        Ok(self.read_lock()?.is_empty())
    }

    /// Append a single entry
    pub fn append(&self, entry: SpendEntry) -> SpendResult<()> {
        self.write_lock()?.push(entry);
        Ok(())
    }

    /// Append a batch of entries, preserving their order
    pub fn append_all(&self, entries: impl IntoIterator<Item = SpendEntry>) -> SpendResult<()> {
        self.write_lock()?.extend(entries);
        Ok(())
    }

    /// Remove all entries, in memory and on disk
    pub fn clear(&self) -> SpendResult<()> {
        self.write_lock()?.clear();

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SpendError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn read_lock(&self) -> SpendResult<std::sync::RwLockReadGuard<'_, Vec<SpendEntry>>> {
        self.data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> SpendResult<std::sync::RwLockWriteGuard<'_, Vec<SpendEntry>>> {
        self.data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
