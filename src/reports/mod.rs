//! Report generation for analysis results.
//!
//! Two output formats:
//! - Summary: colored terminal text
//! - JSON: structured data for programmatic integration
//!
//! Reporters render recommendations in the order the engine produced them
//! and never re-sort.

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::error::Result;
use crate::history::HistoryEntry;
use crate::pipeline::AnalysisReport;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render one analysis
    fn generate_analysis_report(&self, report: &AnalysisReport) -> Result<String>;

    /// Render stored history, newest first
    fn generate_history_report(&self, entries: &[HistoryEntry]) -> Result<String>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            if colored {
                Box::new(reporter)
            } else {
                Box::new(reporter.no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_format() {
        for format in [ReportFormat::Summary, ReportFormat::Json] {
            assert_eq!(create_reporter(format).format(), format);
            assert_eq!(create_reporter_with_options(format, false).format(), format);
        }
    }
}
