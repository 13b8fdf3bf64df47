//! History command handler.

use crate::config::AppConfig;
use crate::history::{HistoryStore, JsonFileHistoryStore};
use crate::pipeline::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::create_reporter_with_options;
use anyhow::{Context, Result};

/// Run the history command: list stored analyses, or clear them.
pub fn run_history(app: &AppConfig, clear: bool) -> Result<i32> {
    let mut store = JsonFileHistoryStore::new(app.history.resolved_path());

    if clear {
        store
            .clear()
            .with_context(|| format!("failed to clear {}", store.path().display()))?;
        if !app.behavior.quiet {
            tracing::info!("Cleared history at {}", store.path().display());
        }
        return Ok(exit_codes::SUCCESS);
    }

    let entries = store.load();
    let target = OutputTarget::from_option(app.output.file.clone());
    let reporter = create_reporter_with_options(
        app.output.format,
        should_use_color(app.output.no_color, &target),
    );
    let output = reporter
        .generate_history_report(&entries)
        .context("failed to render history")?;
    write_output(&output, &target, app.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::reports::ReportFormat;
    use chrono::Utc;

    #[test]
    fn test_history_to_file_then_clear() {
        let tmp = tempfile::tempdir().unwrap();
        let history_path = tmp.path().join("history.json");
        let output_path = tmp.path().join("history-report.json");

        let mut store = JsonFileHistoryStore::new(&history_path);
        store
            .append(HistoryEntry::new("https://example.com/", Utc::now(), 66))
            .unwrap();

        let mut app = AppConfig::default();
        app.history.path = Some(history_path.clone());
        app.output.format = ReportFormat::Json;
        app.output.file = Some(output_path.clone());
        app.behavior.quiet = true;

        assert_eq!(run_history(&app, false).unwrap(), exit_codes::SUCCESS);
        let rendered = std::fs::read_to_string(&output_path).unwrap();
        assert!(rendered.contains("https://example.com/"));

        assert_eq!(run_history(&app, true).unwrap(), exit_codes::SUCCESS);
        assert!(store.load().is_empty());
        assert!(!history_path.exists());
    }
}
