//! Recommendation engine.
//!
//! Evaluates the enabled rows of the battery against one snapshot and orders
//! the result by priority.

use super::rules::{Rule, BATTERY};
use super::types::{Recommendation, RuleGroup};
use crate::model::AnalysisSnapshot;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which rule groups a run starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Extended when the snapshot carries business data, minimal otherwise
    #[default]
    Auto,
    /// Full battery without the baseline rules
    Extended,
    /// Baseline rules only
    Minimal,
}

impl RuleSet {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Extended => "extended",
            Self::Minimal => "minimal",
        }
    }

    /// Resolve `Auto` against a concrete snapshot.
    #[must_use]
    pub const fn resolve(self, snapshot: &AnalysisSnapshot) -> Self {
        match self {
            Self::Auto => {
                if snapshot.business_profile.is_some() {
                    Self::Extended
                } else {
                    Self::Minimal
                }
            }
            other => other,
        }
    }

    /// Groups switched on by this rule set. `Auto` must be resolved first.
    #[must_use]
    pub fn groups(self) -> BTreeSet<RuleGroup> {
        match self {
            Self::Minimal => BTreeSet::from([RuleGroup::Baseline]),
            Self::Auto | Self::Extended => RuleGroup::all()
                .iter()
                .copied()
                .filter(|group| *group != RuleGroup::Baseline)
                .collect(),
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine configuration: a rule set plus groups switched off on top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rule_set: RuleSet,
    pub disabled_groups: BTreeSet<RuleGroup>,
}

impl EngineConfig {
    #[must_use]
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            rule_set,
            disabled_groups: BTreeSet::new(),
        }
    }

    /// Switch a group off.
    #[must_use]
    pub fn without(mut self, group: RuleGroup) -> Self {
        self.disabled_groups.insert(group);
        self
    }

    /// Groups that will be evaluated for this snapshot.
    #[must_use]
    pub fn enabled_groups(&self, snapshot: &AnalysisSnapshot) -> BTreeSet<RuleGroup> {
        let mut groups = self.rule_set.resolve(snapshot).groups();
        groups.retain(|group| !self.disabled_groups.contains(group));
        groups
    }
}

/// Maps a snapshot to an ordered list of recommendations.
///
/// The engine holds configuration only; each call is independent and pure.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_rule_set(rule_set: RuleSet) -> Self {
        Self::new(EngineConfig::new(rule_set))
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rows of the battery that are active for this snapshot, in order.
    pub fn active_rules<'a>(
        &self,
        snapshot: &'a AnalysisSnapshot,
    ) -> impl Iterator<Item = &'static Rule> + 'a {
        let groups = self.config.enabled_groups(snapshot);
        BATTERY.iter().filter(move |rule| groups.contains(&rule.group))
    }

    /// Evaluate every active rule and sort the output by priority.
    ///
    /// The sort is stable: recommendations with equal priority keep the
    /// order their rules are declared in.
    #[must_use]
    pub fn generate(&self, snapshot: &AnalysisSnapshot) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = self
            .active_rules(snapshot)
            .filter_map(|rule| rule.evaluate(snapshot))
            .collect();

        recommendations.sort_by_key(|rec| rec.priority.rank());

        tracing::debug!(
            url = %snapshot.url,
            rule_set = %self.config.rule_set.resolve(snapshot),
            fired = recommendations.len(),
            "generated recommendations"
        );

        recommendations
    }
}

/// Generate recommendations with the default (`Auto`) configuration.
#[must_use]
pub fn generate_recommendations(snapshot: &AnalysisSnapshot) -> Vec<Recommendation> {
    RecommendationEngine::default().generate(snapshot)
}
