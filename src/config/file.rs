//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::ConfigPreset;
use super::types::AppConfig;
use super::validation::Validatable;
use crate::recommend::RuleSet;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".seo-insight.yaml",
    ".seo-insight.yml",
    "seo-insight.yaml",
    "seo-insight.yml",
];

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. User config directory (`~/.config/seo-insight/`)
/// 3. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|dir| dir.join("seo-insight")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Discover a config file by searching standard locations.
///
/// An explicit path wins when it exists; otherwise each of
/// [`config_search_dirs`] is tried in order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist", path.display());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// Unreadable or invalid files fall back to defaults with a warning.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };

    match load_config_file(&path) {
        Ok(config) => {
            let errors = config.validate();
            if errors.is_empty() {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            } else {
                for error in &errors {
                    tracing::warn!("{}: {}", path.display(), error);
                }
                tracing::warn!("Ignoring invalid config {}", path.display());
                (AppConfig::default(), None)
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            (AppConfig::default(), None)
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so CLI flags that
    /// were not given leave the file config alone.
    pub fn merge(&mut self, other: &Self) {
        // Engine
        if other.engine.rule_set != RuleSet::Auto {
            self.engine.rule_set = other.engine.rule_set;
        }
        self.engine
            .disabled_groups
            .extend(other.engine.disabled_groups.iter().copied());

        // Output
        if other.output.format != ReportFormat::Summary {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // History
        if !other.history.enabled {
            self.history.enabled = false;
        }
        if other.history.path.is_some() {
            self.history.path.clone_from(&other.history.path);
        }

        // Simulation
        if other.simulation.seed.is_some() {
            self.simulation.seed = other.simulation.seed;
        }

        // Behavior
        if other.behavior.fail_on.is_some() {
            self.behavior.fail_on = other.behavior.fail_on;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file for a preset.
#[must_use]
pub fn generate_example_config(preset: ConfigPreset) -> String {
    let example = AppConfig::from_preset(preset);
    format!(
        r"# seo-insight configuration ({preset} preset: {description})
# Place this file at .seo-insight.yaml in your project root or ~/.config/seo-insight/
#
# engine.rule_set: auto, extended, minimal
# engine.disabled_groups: business-profile, reviews, photos, engagement,
#   technical, local-seo, content, authority, baseline
# output.format: summary, json
# behavior.fail_on: critical, high, medium, low
#
# CLI arguments always override file settings.

{}",
        serde_yaml::to_string(&example).unwrap_or_default(),
        description = preset.description(),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{Priority, RuleGroup};
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".seo-insight.yaml");
        std::fs::write(&config_path, "engine:\n  rule_set: minimal\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
engine:
  rule_set: extended
  disabled_groups: [photos, local-seo]
output:
  format: json
simulation:
  seed: 42
behavior:
  fail_on: high
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.engine.rule_set, RuleSet::Extended);
        assert!(config.engine.disabled_groups.contains(&RuleGroup::Photos));
        assert!(config.engine.disabled_groups.contains(&RuleGroup::LocalSeo));
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.behavior.fail_on, Some(Priority::High));
        assert!(config.history.enabled);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_bad_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "engine:\n  rule_set: sometimes\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "history:\n  capacity: 50\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.output.format = ReportFormat::Json;
        base.simulation.seed = Some(1);

        let mut overrides = AppConfig::default();
        overrides.engine.rule_set = RuleSet::Minimal;
        overrides.simulation.seed = Some(9);
        overrides.history.enabled = false;

        base.merge(&overrides);

        assert_eq!(base.engine.rule_set, RuleSet::Minimal);
        assert_eq!(base.output.format, ReportFormat::Json);
        assert_eq!(base.simulation.seed, Some(9));
        assert!(!base.history.enabled);
    }

    #[test]
    fn test_generate_example_config_parses_back() {
        for preset in ConfigPreset::all() {
            let example = generate_example_config(*preset);
            assert!(example.contains("engine:"));
            let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
            assert_eq!(parsed, AppConfig::from_preset(*preset));
        }
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "output:\n  no_color: true\n").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
