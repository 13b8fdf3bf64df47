//! Analysis history.
//!
//! A bounded, newest-first list of past analyses. [`HistoryStore`] is the
//! persistence boundary; [`JsonFileHistoryStore`] keeps the list in a JSON
//! file, [`MemoryHistoryStore`] keeps it in memory.
//!
//! Loading never fails: a missing or unreadable store reads as empty.

mod file;

pub use file::{default_history_path, JsonFileHistoryStore};

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries a store retains.
pub const HISTORY_CAPACITY: usize = 10;

/// One past analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    /// Serialized as ISO 8601
    pub timestamp: DateTime<Utc>,
    pub overall_score: u8,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(url: impl Into<String>, timestamp: DateTime<Utc>, overall_score: u8) -> Self {
        Self {
            url: url.into(),
            timestamp,
            overall_score,
        }
    }
}

/// Persistence boundary for analysis history.
pub trait HistoryStore {
    /// Stored entries, newest first. Empty when nothing usable is stored.
    fn load(&self) -> Vec<HistoryEntry>;

    /// Prepend an entry, keep the newest [`HISTORY_CAPACITY`], and overwrite
    /// the stored collection.
    fn append(&mut self, entry: HistoryEntry) -> Result<()>;

    /// Remove every stored entry.
    fn clear(&mut self) -> Result<()>;
}

/// Prepend `entry` and drop whatever no longer fits.
#[must_use]
pub fn push_bounded(mut entries: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    entries.insert(0, entry);
    entries.truncate(HISTORY_CAPACITY);
    entries
}

/// In-memory store, used for `--no-history` runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        let entries = std::mem::take(&mut self.entries);
        self.entries = push_bounded(entries, entry);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}
