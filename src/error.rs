//! Unified error types for seo-insight.
//!
//! This module provides the error hierarchy for the library, with context
//! chaining for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for seo-insight operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SeoInsightError {
    /// The target URL was rejected before any analysis ran
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    /// Errors while producing or loading a snapshot
    #[error("Snapshot unavailable: {context}")]
    Snapshot {
        context: String,
        #[source]
        source: SnapshotErrorKind,
    },

    /// Errors while persisting analysis history
    #[error("History store failed: {context}")]
    History {
        context: String,
        #[source]
        source: HistoryErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Producer contract violations (out-of-range metrics)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific snapshot error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SnapshotErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Specific history error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HistoryErrorKind {
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for seo-insight operations
pub type Result<T> = std::result::Result<T, SeoInsightError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SeoInsightError {
    /// Create an invalid URL error
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a snapshot error with context
    pub fn snapshot(context: impl Into<String>, source: SnapshotErrorKind) -> Self {
        Self::Snapshot {
            context: context.into(),
            source,
        }
    }

    /// Create a history error with context
    pub fn history(context: impl Into<String>, source: HistoryErrorKind) -> Self {
        Self::History {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SeoInsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SeoInsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::snapshot(
            "JSON deserialization",
            SnapshotErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context, building
/// a chain that shows the path through the code.
///
/// # Example
///
/// ```ignore
/// use seo_insight::error::ErrorContext;
///
/// fn load_snapshot(path: &Path) -> Result<AnalysisSnapshot> {
///     let content = std::fs::read_to_string(path)
///         .context("reading snapshot file")?;
///
///     serde_json::from_str(&content)
///         .with_context(|| format!("parsing snapshot from {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SeoInsightError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SeoInsightError, new_ctx: &str) -> SeoInsightError {
    match err {
        SeoInsightError::InvalidUrl { input, reason } => SeoInsightError::InvalidUrl {
            input,
            reason: chain_context(new_ctx, &reason),
        },
        SeoInsightError::Snapshot {
            context: existing,
            source,
        } => SeoInsightError::Snapshot {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SeoInsightError::History {
            context: existing,
            source,
        } => SeoInsightError::History {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SeoInsightError::Report {
            context: existing,
            source,
        } => SeoInsightError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SeoInsightError::Io {
            path,
            message,
            source,
        } => SeoInsightError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SeoInsightError::Validation(msg) => {
            SeoInsightError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeoInsightError::invalid_url("not a url", "relative URL without a base");
        let display = err.to_string();
        assert!(display.contains("not a url"), "{display}");

        let err = SeoInsightError::history(
            "writing history.json",
            HistoryErrorKind::Serialization("key must be a string".to_string()),
        );
        assert!(err.to_string().contains("History"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SeoInsightError::io("/path/to/history.json", io_err);

        assert!(err.to_string().contains("/path/to/history.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(SeoInsightError::snapshot(
                "base",
                SnapshotErrorKind::InvalidJson("eof".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(SeoInsightError::Snapshot { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(SeoInsightError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_json_error_converts_to_snapshot_error() {
        let err: SeoInsightError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            SeoInsightError::Snapshot {
                source: SnapshotErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}
