//! JSON file-backed history store.

use super::{push_bounded, HistoryEntry, HistoryStore, HISTORY_CAPACITY};
use crate::error::{HistoryErrorKind, Result, SeoInsightError};
use std::path::{Path, PathBuf};

const HISTORY_FILE_NAME: &str = "history.json";

/// Default history location: `<data dir>/seo-insight/history.json`.
///
/// Falls back to the current directory when the platform has no data dir.
#[must_use]
pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("seo-insight")
        .join(HISTORY_FILE_NAME)
}

/// History persisted as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_entries(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SeoInsightError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            SeoInsightError::history(
                format!("encoding {}", self.path.display()),
                HistoryErrorKind::Serialization(e.to_string()),
            )
        })?;

        std::fs::write(&self.path, json).map_err(|e| SeoInsightError::io(&self.path, e))
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Vec<HistoryEntry> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No history at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read history from {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
            Ok(mut entries) => {
                // Files written by hand or by other tools may be longer
                entries.truncate(HISTORY_CAPACITY);
                entries
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt history at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        let entries = push_bounded(self.load(), entry);
        self.write_entries(&entries)
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SeoInsightError::io(&self.path, e)),
        }
    }
}
