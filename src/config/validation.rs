//! Configuration validation for seo-insight.

use super::types::{AppConfig, HistoryConfig, OutputConfig};
use crate::history::HISTORY_CAPACITY;
use crate::recommend::{EngineConfig, RuleGroup, RuleSet};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.engine.validate());
        errors.extend(self.output.validate());
        errors.extend(self.history.validate());
        errors
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.rule_set == RuleSet::Minimal && self.disabled_groups.contains(&RuleGroup::Baseline)
        {
            errors.push(ConfigError {
                field: "engine.disabled_groups".to_string(),
                message: "the minimal rule set has only the baseline group; disabling it \
                          leaves nothing to evaluate"
                    .to_string(),
            });
        }

        if self.rule_set == RuleSet::Extended
            && RuleSet::Extended
                .groups()
                .iter()
                .all(|group| self.disabled_groups.contains(group))
        {
            errors.push(ConfigError {
                field: "engine.disabled_groups".to_string(),
                message: "every group of the extended rule set is disabled".to_string(),
            });
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for HistoryConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity != HISTORY_CAPACITY {
            errors.push(ConfigError {
                field: "history.capacity".to_string(),
                message: format!(
                    "History keeps exactly {HISTORY_CAPACITY} entries, got {}",
                    self.capacity
                ),
            });
        }

        if let Some(ref path) = self.path {
            if path.is_dir() {
                errors.push(ConfigError {
                    field: "history.path".to_string(),
                    message: format!("{} is a directory, expected a file", path.display()),
                });
            }
        }

        errors
    }
}
