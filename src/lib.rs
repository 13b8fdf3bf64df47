//! **SEO health scoring and prioritized recommendations.**
//!
//! `seo-insight` scores a website on four pillars (authority, relevance,
//! proximity, technical) and turns the collected metrics into an ordered
//! action plan. It powers both the `seo-insight` command-line tool and a
//! Rust library for programmatic use.
//!
//! Metrics are simulated: no crawling or ranking happens. The part that
//! carries weight is the rule engine, a declarative battery of threshold
//! checks that is deterministic for a given snapshot.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`AnalysisSnapshot`], the fixed-shape bag of metrics for one
//!   URL, and its boundary validation.
//! - **[`recommend`]**: the rule battery and [`RecommendationEngine`].
//! - **[`score`]**: the overall score and its status bucket.
//! - **[`simulate`]**: [`SnapshotSource`] producers (seeded simulation, JSON replay).
//! - **[`history`]**: the bounded analysis history and its stores.
//! - **[`pipeline`]**: produce, validate, score, recommend, record in one call.
//! - **[`reports`]**: summary and JSON renderers.
//! - **[`config`]**: YAML configuration, presets, and validation.
//!
//! ## Getting Started
//!
//! ```
//! use seo_insight::pipeline::{analyze, parse_target_url};
//! use seo_insight::recommend::RecommendationEngine;
//! use seo_insight::simulate::SimulatedSource;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = parse_target_url("example.com")?;
//!     let mut source = SimulatedSource::with_seed(42);
//!     let report = analyze(&url, &mut source, &RecommendationEngine::default(), None)?;
//!
//!     println!("{} scored {} ({})", url, report.score.overall, report.score.status);
//!     for rec in &report.recommendations {
//!         println!("[{}] {}", rec.priority, rec.title);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Metric math works in f64 and lands in bounded u8/u32 ranges
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Metric structs legitimately carry many presence flags
    clippy::struct_excessive_bools,
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod recommend;
pub mod reports;
pub mod score;
pub mod simulate;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, ConfigPreset, Validatable};
pub use error::{ErrorContext, Result, SeoInsightError};
pub use history::{HistoryEntry, HistoryStore, JsonFileHistoryStore, MemoryHistoryStore};
pub use model::{AnalysisSnapshot, BusinessProfile};
pub use pipeline::{analyze, parse_target_url, AnalysisReport};
pub use recommend::{
    generate_recommendations, EngineConfig, Priority, Recommendation, RecommendationEngine,
    RuleSet,
};
pub use reports::{ReportFormat, ReportGenerator};
pub use score::{overall_score, ScoreCard, ScoreStatus};
pub use simulate::{FileSnapshotSource, SimulatedSource, SnapshotSource};
