//! Pipeline orchestration for a single analysis.
//!
//! produce → validate → score → recommend → record, shared by the CLI
//! handlers and library callers. The snapshot producer and the history store
//! are passed in explicitly.

mod output;
mod target;

pub use output::{should_use_color, write_output, OutputTarget};
pub use target::parse_target_url;

use crate::error::Result;
use crate::history::{HistoryEntry, HistoryStore};
use crate::model::AnalysisSnapshot;
use crate::recommend::{
    Priority, Recommendation, RecommendationEngine, RecommendationSummary, RuleSet,
};
use crate::score::ScoreCard;
use crate::simulate::SnapshotSource;
use serde::{Deserialize, Serialize};
use url::Url;

/// Exit codes for scripting and CI use
pub mod exit_codes {
    /// Success, or no recommendation reached the `--fail-on` priority
    pub const SUCCESS: i32 = 0;
    /// At least one recommendation reached the `--fail-on` priority
    pub const THRESHOLD_MET: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Everything one analysis produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub snapshot: AnalysisSnapshot,
    pub score: ScoreCard,
    /// Rule set the engine actually ran (`auto` is resolved)
    pub rule_set: RuleSet,
    /// Engine output, already in priority order
    pub recommendations: Vec<Recommendation>,
    pub summary: RecommendationSummary,
}

impl AnalysisReport {
    /// Exit code for a `--fail-on` threshold.
    #[must_use]
    pub const fn exit_code(&self, fail_on: Option<Priority>) -> i32 {
        match fail_on {
            Some(priority) if self.summary.at_or_above(priority) > 0 => exit_codes::THRESHOLD_MET,
            _ => exit_codes::SUCCESS,
        }
    }
}

/// Run one analysis of `target`.
///
/// The snapshot is validated before scoring; a producer that hands back
/// out-of-range metrics fails the run. A history write failure is logged
/// and does not fail the run.
pub fn analyze(
    target: &Url,
    source: &mut dyn SnapshotSource,
    engine: &RecommendationEngine,
    history: Option<&mut dyn HistoryStore>,
) -> Result<AnalysisReport> {
    tracing::info!("Analyzing {}", target);

    let snapshot = source.produce(target)?;
    snapshot.validate()?;

    let score = ScoreCard::from_snapshot(&snapshot);
    let rule_set = engine.config().rule_set.resolve(&snapshot);
    let recommendations = engine.generate(&snapshot);
    let summary = RecommendationSummary::from_recommendations(&recommendations);

    tracing::info!(
        "Overall score {} ({}), {} recommendations",
        score.overall,
        score.status,
        summary.total
    );

    if let Some(store) = history {
        let entry = HistoryEntry::new(snapshot.url.clone(), snapshot.analyzed_at, score.overall);
        if let Err(e) = store.append(entry) {
            tracing::warn!("Failed to record analysis history: {}", e);
        }
    }

    Ok(AnalysisReport {
        snapshot,
        score,
        rule_set,
        recommendations,
        summary,
    })
}
