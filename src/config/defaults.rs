//! Configuration presets for seo-insight.

use super::types::{AppConfig, BehaviorConfig, HistoryConfig, OutputConfig};
use crate::recommend::{EngineConfig, Priority, RuleSet};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Auto rule set, summary output, history on
    Default,
    /// CI/CD: JSON output, no history, fail on high-priority findings
    CiCd,
    /// Baseline: minimal rule set only
    Baseline,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Baseline => "baseline",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            "baseline" | "minimal" => Some(Self::Baseline),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Full rule battery when business data exists, summary output",
            Self::CiCd => "JSON output without history, fails on high-priority findings",
            Self::Baseline => "Baseline pillar checks only",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Baseline]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Baseline => Self::baseline_preset(),
        }
    }

    fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            history: HistoryConfig {
                enabled: false,
                ..HistoryConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on: Some(Priority::High),
                quiet: true,
            },
            ..Self::default()
        }
    }

    fn baseline_preset() -> Self {
        Self {
            engine: EngineConfig::new(RuleSet::Minimal),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in ConfigPreset::all() {
            let config = AppConfig::from_preset(*preset);
            assert!(config.is_valid(), "{preset}: {:?}", config.validate());
        }
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.history.enabled);
        assert_eq!(config.behavior.fail_on, Some(Priority::High));
    }

    #[test]
    fn test_baseline_preset_uses_minimal_rules() {
        let config = AppConfig::from_preset(ConfigPreset::Baseline);
        assert_eq!(config.engine.rule_set, RuleSet::Minimal);
    }
}
