//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: score one URL and print its
//! recommendations.

use crate::config::AppConfig;
use crate::history::{HistoryStore, JsonFileHistoryStore};
use crate::pipeline::{
    analyze, exit_codes, parse_target_url, should_use_color, write_output, AnalysisReport,
    OutputTarget,
};
use crate::recommend::RecommendationEngine;
use crate::reports::create_reporter_with_options;
use crate::simulate::{FileSnapshotSource, SimulatedSource, SnapshotSource};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Analyze command configuration
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// URL as typed by the user
    pub url: String,
    /// Replay this snapshot instead of simulating one
    pub snapshot: Option<PathBuf>,
    /// Effective configuration (file merged with CLI flags)
    pub app: AppConfig,
}

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let report = analyze_with_config(&config)?;

    let target = OutputTarget::from_option(config.app.output.file.clone());
    let colored = should_use_color(config.app.output.no_color, &target);
    let reporter = create_reporter_with_options(config.app.output.format, colored);
    let output = reporter
        .generate_analysis_report(&report)
        .context("failed to render analysis report")?;
    write_output(&output, &target, config.app.behavior.quiet)?;

    let exit_code = report.exit_code(config.app.behavior.fail_on);
    if exit_code == exit_codes::THRESHOLD_MET {
        if let Some(fail_on) = config.app.behavior.fail_on {
            tracing::error!(
                "{} recommendation(s) at or above {} priority",
                report.summary.at_or_above(fail_on),
                fail_on
            );
        }
    }
    Ok(exit_code)
}

/// Run the pipeline for an analyze configuration without rendering.
pub fn analyze_with_config(config: &AnalyzeConfig) -> Result<AnalysisReport> {
    let url = parse_target_url(&config.url)?;
    let engine = RecommendationEngine::new(config.app.engine.clone());

    let mut source: Box<dyn SnapshotSource> = match (&config.snapshot, config.app.simulation.seed) {
        (Some(path), _) => Box::new(FileSnapshotSource::new(path)),
        (None, Some(seed)) => Box::new(SimulatedSource::with_seed(seed)),
        (None, None) => Box::new(SimulatedSource::from_entropy()),
    };

    let mut store = config
        .app
        .history
        .enabled
        .then(|| JsonFileHistoryStore::new(config.app.history.resolved_path()));

    let report = analyze(
        &url,
        source.as_mut(),
        &engine,
        store.as_mut().map(|s| s as &mut dyn HistoryStore),
    )
    .with_context(|| format!("analysis of {url} failed"))?;

    Ok(report)
}
