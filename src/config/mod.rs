//! Configuration module for seo-insight.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seo_insight::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::CiCd);
//!
//! // Load from file
//! use seo_insight::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.seo-insight.yaml` file in your project root or
//! `~/.config/seo-insight/`:
//!
//! ```yaml
//! engine:
//!   rule_set: extended
//!   disabled_groups: [photos]
//! behavior:
//!   fail_on: high
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{AppConfig, BehaviorConfig, HistoryConfig, OutputConfig, SimulationConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};
