//! Recommendation records and their classification enums.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How urgently a recommendation should be acted on.
///
/// Ordering is `Critical < High < Medium < Low`, matching [`Priority::rank`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: critical=0, high=1, medium=2, low=3
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected effect of following a recommendation. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Impact {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// Effort needed to follow a recommendation. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Named subsets of the rule battery that are switched on or off together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum RuleGroup {
    /// Listing existence and completeness
    BusinessProfile,
    Reviews,
    Photos,
    /// Posts and Q&A activity
    Engagement,
    Technical,
    /// NAP consistency and citations
    LocalSeo,
    Content,
    /// Domain authority and backlinks
    Authority,
    /// Coarse pillar checks used when no business data exists
    Baseline,
}

impl RuleGroup {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BusinessProfile => "business-profile",
            Self::Reviews => "reviews",
            Self::Photos => "photos",
            Self::Engagement => "engagement",
            Self::Technical => "technical",
            Self::LocalSeo => "local-seo",
            Self::Content => "content",
            Self::Authority => "authority",
            Self::Baseline => "baseline",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BusinessProfile,
            Self::Reviews,
            Self::Photos,
            Self::Engagement,
            Self::Technical,
            Self::LocalSeo,
            Self::Content,
            Self::Authority,
            Self::Baseline,
        ]
    }
}

impl std::fmt::Display for RuleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One piece of advice emitted by a triggered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Identifier of the rule that produced this recommendation
    pub rule: String,
    /// Display grouping such as "Technical SEO"; baseline rules have none
    pub category: Option<String>,
    pub priority: Priority,
    pub title: String,
    /// May interpolate live metric values
    pub description: String,
    pub impact: Impact,
    pub difficulty: Difficulty,
    /// Ordered guidance, possibly empty
    pub tips: Vec<String>,
}

impl Recommendation {
    /// Start a recommendation with the fields every rule sets. The rule id
    /// is stamped by [`Rule::evaluate`](super::Rule::evaluate).
    pub(crate) fn new(priority: Priority, title: &str, description: impl Into<String>) -> Self {
        Self {
            rule: String::new(),
            category: None,
            priority,
            title: title.to_string(),
            description: description.into(),
            impact: Impact::Medium,
            difficulty: Difficulty::Medium,
            tips: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    #[must_use]
    pub(crate) const fn effort(mut self, impact: Impact, difficulty: Difficulty) -> Self {
        self.impact = impact;
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub(crate) fn tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips = tips.into_iter().map(Into::into).collect();
        self
    }

    /// Category label for display, falling back to "General".
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }
}

/// Per-priority counts for an action-plan header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Sum of the four counts
    #[serde(default)]
    pub total: usize,
}

impl RecommendationSummary {
    #[must_use]
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        recommendations
            .iter()
            .fold(Self::default(), |mut summary, rec| {
                match rec.priority {
                    Priority::Critical => summary.critical += 1,
                    Priority::High => summary.high += 1,
                    Priority::Medium => summary.medium += 1,
                    Priority::Low => summary.low += 1,
                }
                summary.total += 1;
                summary
            })
    }

    /// Number of recommendations at or above the given priority.
    #[must_use]
    pub const fn at_or_above(&self, priority: Priority) -> usize {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.critical + self.high,
            Priority::Medium => self.critical + self.high + self.medium,
            Priority::Low => self.critical + self.high + self.medium + self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_matches_ordering() {
        let ordered = [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ];
        for (expected, priority) in ordered.iter().enumerate() {
            assert_eq!(usize::from(priority.rank()), expected);
        }
        assert!(Priority::Critical < Priority::Low);
    }

    #[test]
    fn test_priority_parses_from_cli_name() {
        assert_eq!(Priority::from_str("HIGH", true), Ok(Priority::High));
        assert!(Priority::from_str("urgent", true).is_err());
    }

    #[test]
    fn test_rule_group_cli_names_match_display() {
        for group in RuleGroup::all() {
            let value = group.to_possible_value().expect("no skipped variants");
            assert_eq!(value.get_name(), group.name());
        }
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let impact = serde_json::to_string(&Impact::VeryHigh).unwrap();
        assert_eq!(impact, "\"very-high\"");
    }

    #[test]
    fn test_summary_counts() {
        let recs = vec![
            Recommendation::new(Priority::Critical, "A", ""),
            Recommendation::new(Priority::High, "B", ""),
            Recommendation::new(Priority::High, "C", ""),
            Recommendation::new(Priority::Low, "D", ""),
        ];
        let summary = RecommendationSummary::from_recommendations(&recs);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.medium, 0);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.at_or_above(Priority::High), 3);
    }

    #[test]
    fn test_category_label_fallback() {
        let rec = Recommendation::new(Priority::Low, "X", "");
        assert_eq!(rec.category_label(), "General");
        assert_eq!(rec.category("Technical SEO").category_label(), "Technical SEO");
    }
}
