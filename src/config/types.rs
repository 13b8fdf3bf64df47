//! Configuration types for seo-insight.

use crate::history::{default_history_path, HISTORY_CAPACITY};
use crate::recommend::{EngineConfig, Priority};
use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration, as loaded from `.seo-insight.yaml` and
/// overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rule set and disabled rule groups
    pub engine: EngineConfig,
    pub output: OutputConfig,
    pub history: HistoryConfig,
    pub simulation: SimulationConfig,
    pub behavior: BehaviorConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Output file path (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

/// History store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Record each analysis
    pub enabled: bool,
    /// History file (platform data dir when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Number of entries kept. Only the built-in capacity is accepted.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            capacity: HISTORY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    /// Configured history file, or the platform default.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_history_path)
    }
}

/// Snapshot simulation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed RNG seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Exit behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when a recommendation at or above this priority fires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Priority>,
    /// Suppress non-essential output
    pub quiet: bool,
}
