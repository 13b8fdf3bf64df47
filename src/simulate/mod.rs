//! Snapshot producers.
//!
//! A [`SnapshotSource`] turns a target URL into an
//! [`AnalysisSnapshot`]. Nothing here crawls the web: [`SimulatedSource`]
//! draws placeholder metrics from a seedable RNG and [`FileSnapshotSource`]
//! replays a snapshot saved as JSON.

mod random;

pub use random::SimulatedSource;

use crate::error::{ErrorContext, Result, SeoInsightError};
use crate::model::AnalysisSnapshot;
use std::path::PathBuf;
use url::Url;

/// Produces the metric snapshot for a URL.
pub trait SnapshotSource {
    /// Produce a fully materialized snapshot for `url`.
    fn produce(&mut self, url: &Url) -> Result<AnalysisSnapshot>;
}

/// Replays a snapshot stored as JSON.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn produce(&mut self, url: &Url) -> Result<AnalysisSnapshot> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| SeoInsightError::io(&self.path, e))?;
        let snapshot: AnalysisSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("reading snapshot {}", self.path.display()))?;

        if snapshot.url != url.as_str() {
            tracing::warn!(
                "Snapshot {} was recorded for {}, not {}",
                self.path.display(),
                snapshot.url,
                url
            );
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::healthy_snapshot;

    #[test]
    fn test_file_source_replays_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let snapshot = healthy_snapshot();
        std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        let url = Url::parse("https://example.com/").unwrap();
        let loaded = FileSnapshotSource::new(&path).produce(&url).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_file_source_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "[]").unwrap();

        let url = Url::parse("https://example.com/").unwrap();
        let err = FileSnapshotSource::new(&path).produce(&url).unwrap_err();
        assert!(matches!(err, SeoInsightError::Snapshot { .. }), "{err:?}");
    }

    #[test]
    fn test_file_source_missing_file_is_io_error() {
        let url = Url::parse("https://example.com/").unwrap();
        let err = FileSnapshotSource::new("/nonexistent/snapshot.json")
            .produce(&url)
            .unwrap_err();
        assert!(matches!(err, SeoInsightError::Io { .. }));
    }
}
