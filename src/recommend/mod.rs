//! Recommendation rule engine.
//!
//! Turns an [`AnalysisSnapshot`](crate::model::AnalysisSnapshot) into a
//! prioritized list of advice. The battery of threshold rules lives in
//! [`rules`] as a declarative table; [`RecommendationEngine`] picks the rows
//! enabled by its [`EngineConfig`], evaluates them in order and stable-sorts
//! the output by [`Priority`].
//!
//! # Usage
//!
//! ```
//! use seo_insight::recommend::{RecommendationEngine, RuleSet};
//! # fn demo(snapshot: &seo_insight::model::AnalysisSnapshot) {
//! let engine = RecommendationEngine::with_rule_set(RuleSet::Extended);
//! for rec in engine.generate(snapshot) {
//!     println!("[{}] {}: {}", rec.priority, rec.title, rec.description);
//! }
//! # }
//! ```

mod engine;
pub mod rules;
mod types;

pub use engine::{generate_recommendations, EngineConfig, RecommendationEngine, RuleSet};
pub use rules::{Rule, BATTERY};
pub use types::{
    Difficulty, Impact, Priority, Recommendation, RecommendationSummary, RuleGroup,
};
