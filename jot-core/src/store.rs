//! Local persistence for journal entries.
//!
//! Entries live in one JSON file (`{journal_dir}/entries.json`), newest
//! first. The file is the single source of truth for the favorite flag.

use crate::config::Config;
use crate::entry::{NewEntry, StoredEntry};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

pub const ENTRIES_FILE: &str = "entries.json";

/// A failure raised by the entry store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access the journal file: {0}")]
    Io(#[from] std::io::Error),
    #[error("the journal file is not valid JSON: {0}")]
    Corrupted(#[from] serde_json::Error),
    #[error("no entry with id '{0}'")]
    UnknownEntry(String),
}

/// The persistence contract the entry feed consumes.
///
/// Implementations must be safe to call repeatedly; toggling an unknown id
/// fails with [`StoreError::UnknownEntry`] and changes nothing.
pub trait EntryStore {
    /// Returns every entry in store order.
    fn all_entries(&self) -> Result<Vec<StoredEntry>, StoreError>;
    /// Flips the favorite flag of `id` and returns the new state.
    fn toggle_favorite(&self, id: &str) -> Result<bool, StoreError>;
}

// A feed can mount a borrowed store.
impl<S: EntryStore + ?Sized> EntryStore for &S {
    fn all_entries(&self) -> Result<Vec<StoredEntry>, StoreError> {
        (**self).all_entries()
    }

    fn toggle_favorite(&self, id: &str) -> Result<bool, StoreError> {
        (**self).toggle_favorite(id)
    }
}

/// File-backed entry store: one JSON array per journal.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens the store under `config.journal_dir`, creating the directory
    /// (but not the file) if needed. A missing file reads as an empty journal.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.journal_dir)?;
        Ok(Self {
            path: config.journal_dir.join(ENTRIES_FILE),
        })
    }

    /// The file entries are persisted in.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a new entry at the front of the journal (newest first).
    pub fn create_entry(&self, new: NewEntry) -> Result<StoredEntry, StoreError> {
        let entry = StoredEntry {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            body: new.body,
            created_at: Local::now().to_rfc3339(),
            favorite: false,
        };
        let mut entries = self.read_all()?;
        entries.insert(0, entry.clone());
        self.write_all(&entries)?;
        Ok(entry)
    }

    /// Replaces the title and body of an existing entry.
    pub fn update_entry(&self, id: &str, title: &str, body: &str) -> Result<StoredEntry, StoreError> {
        let mut entries = self.read_all()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::UnknownEntry(id.to_string()))?;
        entry.title = title.to_string();
        entry.body = body.to_string();
        let updated = entry.clone();
        self.write_all(&entries)?;
        Ok(updated)
    }

    /// Looks up a single entry by id.
    pub fn entry(&self, id: &str) -> Result<Option<StoredEntry>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|e| e.id == id))
    }

    fn read_all(&self) -> Result<Vec<StoredEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, entries: &[StoredEntry]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl EntryStore for JsonStore {
    fn all_entries(&self) -> Result<Vec<StoredEntry>, StoreError> {
        self.read_all()
    }

    fn toggle_favorite(&self, id: &str) -> Result<bool, StoreError> {
        let mut entries = self.read_all()?;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::UnknownEntry(id.to_string()))?;
        entry.favorite = !entry.favorite;
        let state = entry.favorite;
        self.write_all(&entries)?;
        Ok(state)
    }
}
