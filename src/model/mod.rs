//! Metric snapshot data model.
//!
//! An [`AnalysisSnapshot`] is the fixed-shape bag of metrics produced for one
//! analyzed URL. Producers (see [`crate::simulate`]) build it, the boundary
//! check in [`validation`] rejects out-of-range values, and the scoring and
//! recommendation layers consume it read-only.

mod business;
mod snapshot;
mod validation;

pub use business::{BusinessProfile, MIN_REVIEW_SAMPLE};
pub use snapshot::{
    AnalysisSnapshot, AuthorityMetrics, BacklinkMetrics, ContentMetrics, KeywordMetric,
    LinkDistribution, ProximityMetrics, RelevanceMetrics, SitemapStatus, TechnicalMetrics,
};
pub use validation::{MAX_KEYWORDS, MAX_RATING};
