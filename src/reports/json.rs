//! JSON report generator.

use super::{ReportFormat, ReportGenerator};
use crate::error::{ReportErrorKind, Result, SeoInsightError};
use crate::history::HistoryEntry;
use crate::pipeline::AnalysisReport;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| {
            SeoInsightError::report(
                "encoding JSON report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_analysis_report(&self, report: &AnalysisReport) -> Result<String> {
        self.to_json(&JsonAnalysisReport {
            metadata: JsonReportMetadata::now(),
            analysis: report,
        })
    }

    fn generate_history_report(&self, entries: &[HistoryEntry]) -> Result<String> {
        self.to_json(&JsonHistoryReport {
            metadata: JsonReportMetadata::now(),
            entries,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonAnalysisReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    analysis: &'a AnalysisReport,
}

#[derive(Serialize)]
struct JsonHistoryReport<'a> {
    metadata: JsonReportMetadata,
    entries: &'a [HistoryEntry],
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

impl JsonReportMetadata {
    fn now() -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::healthy_snapshot;
    use crate::recommend::{generate_recommendations, RecommendationSummary, RuleSet};
    use crate::score::ScoreCard;

    #[test]
    fn test_analysis_json_shape() {
        let mut snapshot = healthy_snapshot();
        snapshot.technical.ssl_enabled = false;
        let recommendations = generate_recommendations(&snapshot);
        let report = AnalysisReport {
            score: ScoreCard::from_snapshot(&snapshot),
            rule_set: RuleSet::Extended,
            summary: RecommendationSummary::from_recommendations(&recommendations),
            recommendations,
            snapshot,
        };

        let json = JsonReporter::new().generate_analysis_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "seo-insight");
        assert_eq!(value["rule_set"], "extended");
        assert_eq!(value["score"]["status"], "excellent");
        assert_eq!(value["summary"]["critical"], 1);
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["recommendations"][0]["rule"], "enable-ssl");
        assert_eq!(value["recommendations"][0]["priority"], "critical");
        assert_eq!(value["snapshot"]["url"], "https://example.com/");
    }

    #[test]
    fn test_history_json_compact() {
        let snapshot = healthy_snapshot();
        let entries = [HistoryEntry::new(&snapshot.url, snapshot.analyzed_at, 81)];
        let json = JsonReporter::new()
            .pretty(false)
            .generate_history_report(&entries)
            .unwrap();

        assert!(!json.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][0]["overall_score"], 81);
        assert_eq!(value["entries"][0]["timestamp"], "2026-01-15T09:30:00Z");
    }
}
