//! Overall score aggregation.
//!
//! The headline score is the unweighted mean of the four pillar scores
//! (authority, relevance, proximity, technical), rounded half up, and is
//! bucketed into a [`ScoreStatus`].

use crate::model::AnalysisSnapshot;
use serde::{Deserialize, Serialize};

/// Status bucket for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreStatus {
    /// 80-100
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Fair,
    /// Below 40
    NeedsImprovement,
}

impl ScoreStatus {
    /// Create status from score. Lower bounds are inclusive.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mean of the pillar scores, rounded half up.
#[must_use]
pub fn mean_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let count = scores.len() as u32;
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    // floor(sum / count + 1/2)
    let rounded = (2 * sum + count) / (2 * count);
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

/// Overall score for a snapshot.
#[must_use]
pub fn overall_score(snapshot: &AnalysisSnapshot) -> u8 {
    mean_score(&snapshot.pillar_scores())
}

/// Headline numbers for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub overall: u8,
    pub status: ScoreStatus,
    pub authority: u8,
    pub relevance: u8,
    pub proximity: u8,
    pub technical: u8,
    /// Business profile score, when business data exists
    pub business_profile: Option<u8>,
}

impl ScoreCard {
    #[must_use]
    pub fn from_snapshot(snapshot: &AnalysisSnapshot) -> Self {
        let overall = overall_score(snapshot);
        Self {
            overall,
            status: ScoreStatus::from_score(overall),
            authority: snapshot.authority.score,
            relevance: snapshot.relevance.score,
            proximity: snapshot.proximity.score,
            technical: snapshot.technical.score,
            business_profile: snapshot
                .business_profile
                .as_ref()
                .map(|profile| profile.overall_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::healthy_snapshot;

    #[test]
    fn test_status_from_score() {
        assert_eq!(ScoreStatus::from_score(100), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::from_score(80), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::from_score(79), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(60), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(59), ScoreStatus::Fair);
        assert_eq!(ScoreStatus::from_score(40), ScoreStatus::Fair);
        assert_eq!(ScoreStatus::from_score(39), ScoreStatus::NeedsImprovement);
        assert_eq!(ScoreStatus::from_score(0), ScoreStatus::NeedsImprovement);
    }

    #[test]
    fn test_mean_of_pillars() {
        assert_eq!(mean_score(&[80, 60, 40, 100]), 70);
        assert_eq!(ScoreStatus::from_score(70), ScoreStatus::Good);
    }

    #[test]
    fn test_mean_rounds_half_up() {
        // 281 / 4 = 70.25
        assert_eq!(mean_score(&[80, 61, 40, 100]), 70);
        // 282 / 4 = 70.5
        assert_eq!(mean_score(&[80, 62, 40, 100]), 71);
        // 283 / 4 = 70.75
        assert_eq!(mean_score(&[80, 63, 40, 100]), 71);
        assert_eq!(mean_score(&[100, 100, 100, 100]), 100);
        assert_eq!(mean_score(&[]), 0);
    }

    #[test]
    fn test_score_card_from_snapshot() {
        let mut snapshot = healthy_snapshot();
        snapshot.authority.score = 80;
        snapshot.relevance.score = 60;
        snapshot.proximity.score = 40;
        snapshot.technical.score = 100;

        let card = ScoreCard::from_snapshot(&snapshot);
        assert_eq!(card.overall, 70);
        assert_eq!(card.status, ScoreStatus::Good);
        assert_eq!(card.business_profile, Some(98));
    }
}
