//! Summary report generator for shell output.

use super::{ReportFormat, ReportGenerator};
use crate::error::Result;
use crate::history::HistoryEntry;
use crate::model::AnalysisSnapshot;
use crate::pipeline::AnalysisReport;
use crate::recommend::{Priority, Recommendation};
use crate::score::ScoreStatus;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
const MAX_KEYWORDS_SHOWN: usize = 5;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "red",
        Priority::High => "yellow",
        Priority::Medium => "cyan",
        Priority::Low => "dim",
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

const fn status_color(status: ScoreStatus) -> &'static str {
    match status {
        ScoreStatus::Excellent | ScoreStatus::Good => "green",
        ScoreStatus::Fair => "yellow",
        ScoreStatus::NeedsImprovement => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score_line(&self, label: &str, score: u8) -> String {
        format!("  {:<18}{:>3}", self.color(label, "cyan"), score)
    }

    fn detail_line(&self, label: &str, value: impl std::fmt::Display) -> String {
        format!("    {:<22}{}", self.color(label, "dim"), value)
    }

    /// Per-pillar breakdown of the raw metrics behind the scores.
    fn push_details(&self, lines: &mut Vec<String>, snapshot: &AnalysisSnapshot) {
        lines.push(self.color("Details:", "bold"));

        let authority = &snapshot.authority;
        lines.push(format!("  {}", self.color("Authority", "cyan")));
        lines.push(self.detail_line("Domain authority", authority.domain_authority));
        lines.push(self.detail_line("Page authority", authority.page_authority));
        lines.push(self.detail_line("Trust flow", authority.trust_flow));

        let relevance = &snapshot.relevance;
        lines.push(format!("  {}", self.color("Relevance", "cyan")));
        lines.push(self.detail_line("Content quality", relevance.content_quality));
        lines.push(self.detail_line("Keyword density", relevance.keyword_density));
        lines.push(self.detail_line("Topic match", relevance.topic_match));

        let proximity = &snapshot.proximity;
        lines.push(format!("  {}", self.color("Proximity", "cyan")));
        lines.push(self.detail_line("Local SEO", proximity.local_seo));
        lines.push(self.detail_line("NAP consistency", proximity.nap_consistency));
        lines.push(self.detail_line("Profile status", proximity.gmb_status));

        let technical = &snapshot.technical;
        lines.push(format!("  {}", self.color("Technical", "cyan")));
        lines.push(self.detail_line("Meta tags", technical.meta_tags_score));
        lines.push(self.detail_line(
            "Sitemap",
            format!("{} ({})", technical.sitemap_status, technical.sitemap_score),
        ));
        lines.push(self.detail_line("Page speed", technical.page_speed));
        lines.push(self.detail_line("SSL", yes_no(technical.ssl_enabled)));
        lines.push(self.detail_line("Mobile friendly", yes_no(technical.mobile_friendly)));
        lines.push(self.detail_line("Structured data", yes_no(technical.has_structured_data)));

        let content = &snapshot.content;
        lines.push(format!("  {}", self.color("Content", "cyan")));
        lines.push(self.detail_line("Word count", content.word_count));
        lines.push(self.detail_line("Readability", content.readability));
        lines.push(self.detail_line("Uniqueness", content.uniqueness));
        lines.push(self.detail_line("Images", yes_no(content.has_images)));
        lines.push(self.detail_line("Videos", yes_no(content.has_videos)));
        lines.push(self.detail_line("Heading structure", yes_no(content.has_heading_structure)));

        let backlinks = &snapshot.backlinks;
        lines.push(format!("  {}", self.color("Backlinks", "cyan")));
        lines.push(self.detail_line("Total", backlinks.total));
        lines.push(self.detail_line("Referring domains", backlinks.referring_domains));
        lines.push(self.detail_line("Do-follow", backlinks.do_follow_count));
        lines.push(self.detail_line("Quality", backlinks.quality_score));
        lines.push(self.detail_line(
            "Distribution",
            format!(
                "{} high, {} medium, {} low",
                backlinks.distribution.high,
                backlinks.distribution.medium,
                backlinks.distribution.low
            ),
        ));

        if let Some(profile) = &snapshot.business_profile {
            lines.push(format!("  {}", self.color("Business Profile", "cyan")));
            lines.push(self.detail_line("Claimed", yes_no(profile.has_profile)));
            lines.push(self.detail_line(
                "Completeness",
                format!("{}%", profile.profile_completeness_pct),
            ));
            lines.push(self.detail_line(
                "Reviews",
                format!("{} ({:.1} avg)", profile.review_count, profile.average_rating),
            ));
            lines.push(self.detail_line(
                "Review responses",
                format!("{}%", profile.review_response_rate_pct),
            ));
            lines.push(self.detail_line("Photos", profile.photo_count));
            lines.push(self.detail_line("Posts per month", profile.posts_per_month));
            lines.push(self.detail_line("Citations", profile.citation_count));
        }
        lines.push(String::new());
    }

    fn push_recommendation(&self, lines: &mut Vec<String>, index: usize, rec: &Recommendation) {
        let badge = format!("[{}]", rec.priority.name().to_uppercase());
        lines.push(format!(
            "  {}. {} {}  {}",
            index + 1,
            self.color(&badge, priority_color(rec.priority)),
            self.color(&rec.title, "bold"),
            self.color(&format!("({})", rec.category_label()), "dim"),
        ));
        lines.push(format!("     {}", rec.description));
        lines.push(format!(
            "     {}",
            self.color(
                &format!(
                    "Impact: {} | Difficulty: {}",
                    rec.impact.label(),
                    rec.difficulty.label()
                ),
                "dim"
            )
        ));
        for tip in &rec.tips {
            lines.push(format!("     - {tip}"));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_analysis_report(&self, report: &AnalysisReport) -> Result<String> {
        let snapshot = &report.snapshot;
        let score = &report.score;
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("SEO Analysis", "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
        lines.push(format!("{}  {}", self.color("URL:", "cyan"), snapshot.url));
        lines.push(format!(
            "{}  {}",
            self.color("Analyzed:", "cyan"),
            snapshot.analyzed_at.format(TIMESTAMP_FORMAT)
        ));
        lines.push(format!(
            "{}  {}/100 {}",
            self.color("Overall:", "cyan"),
            score.overall,
            self.color(&format!("({})", score.status), status_color(score.status))
        ));
        lines.push(String::new());

        // Pillars
        lines.push(self.color("Scores:", "bold"));
        lines.push(self.score_line("Authority", score.authority));
        lines.push(self.score_line("Relevance", score.relevance));
        lines.push(self.score_line("Proximity", score.proximity));
        lines.push(self.score_line("Technical", score.technical));
        if let Some(profile) = score.business_profile {
            lines.push(self.score_line("Business Profile", profile));
        }

        if !snapshot.keywords.is_empty() {
            let keywords: Vec<&str> = snapshot
                .keywords
                .iter()
                .take(MAX_KEYWORDS_SHOWN)
                .map(|k| k.keyword.as_str())
                .collect();
            lines.push(format!(
                "  {:<18}{}",
                self.color("Keywords", "cyan"),
                keywords.join(", ")
            ));
        }
        lines.push(String::new());

        self.push_details(&mut lines, snapshot);

        // Recommendations
        let summary = &report.summary;
        lines.push(format!(
            "{} {}",
            self.color(&format!("Recommendations ({}):", summary.total), "bold"),
            self.color(
                &format!(
                    "{} critical, {} high, {} medium, {} low",
                    summary.critical, summary.high, summary.medium, summary.low
                ),
                "dim"
            )
        ));

        if report.recommendations.is_empty() {
            lines.push(format!(
                "  {}",
                self.color(
                    "All checks passed. No recommendations for this site.",
                    "green"
                )
            ));
        } else {
            for (index, rec) in report.recommendations.iter().enumerate() {
                if index > 0 {
                    lines.push(String::new());
                }
                self.push_recommendation(&mut lines, index, rec);
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_history_report(&self, entries: &[HistoryEntry]) -> Result<String> {
        let mut lines = Vec::new();
        lines.push(self.color(&format!("Analysis History ({})", entries.len()), "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));

        if entries.is_empty() {
            lines.push("No analyses recorded yet.".to_string());
        }

        for entry in entries {
            let status = ScoreStatus::from_score(entry.overall_score);
            lines.push(format!(
                "  {}  {} {}  {}",
                self.color(&entry.timestamp.format(TIMESTAMP_FORMAT).to_string(), "dim"),
                self.color(&format!("{:>3}", entry.overall_score), status_color(status)),
                self.color(&format!("{:<17}", status.label()), status_color(status)),
                entry.url
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::healthy_snapshot;
    use crate::model::AnalysisSnapshot;
    use crate::recommend::{generate_recommendations, RecommendationSummary, RuleSet};
    use crate::score::ScoreCard;

    fn report_for(snapshot: AnalysisSnapshot) -> AnalysisReport {
        let recommendations = generate_recommendations(&snapshot);
        AnalysisReport {
            score: ScoreCard::from_snapshot(&snapshot),
            rule_set: RuleSet::Extended,
            summary: RecommendationSummary::from_recommendations(&recommendations),
            recommendations,
            snapshot,
        }
    }

    #[test]
    fn test_all_good_message() {
        let text = SummaryReporter::new()
            .no_color()
            .generate_analysis_report(&report_for(healthy_snapshot()))
            .unwrap();

        assert!(text.contains("All checks passed"), "{text}");
        assert!(text.contains("Recommendations (0):"));
        assert!(text.contains("https://example.com/"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_recommendations_keep_engine_order() {
        let mut snapshot = healthy_snapshot();
        snapshot.content.word_count = 400;
        snapshot.technical.ssl_enabled = false;
        let report = report_for(snapshot);

        let text = SummaryReporter::new()
            .no_color()
            .generate_analysis_report(&report)
            .unwrap();

        let ssl = text.find("Enable HTTPS/SSL Certificate").unwrap();
        let content = text.find(&report.recommendations[1].title).unwrap();
        assert!(ssl < content, "{text}");
        assert!(text.contains("[CRITICAL]"));
        assert!(text.contains("1 critical"));
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let text = SummaryReporter::new()
            .generate_analysis_report(&report_for(healthy_snapshot()))
            .unwrap();
        assert!(text.contains("\x1b[1m"));
    }

    #[test]
    fn test_empty_history() {
        let text = SummaryReporter::new()
            .no_color()
            .generate_history_report(&[])
            .unwrap();
        assert!(text.contains("No analyses recorded yet."));
    }

    #[test]
    fn test_history_lists_entries() {
        let snapshot = healthy_snapshot();
        let entries = vec![HistoryEntry::new(&snapshot.url, snapshot.analyzed_at, 77)];
        let text = SummaryReporter::new()
            .no_color()
            .generate_history_report(&entries)
            .unwrap();
        assert!(text.contains("2026-01-15 09:30 UTC"), "{text}");
        assert!(text.contains(" 77"));
    }

    #[test]
    fn test_history_shows_status_label() {
        let snapshot = healthy_snapshot();
        let entries = vec![
            HistoryEntry::new(&snapshot.url, snapshot.analyzed_at, 85),
            HistoryEntry::new(&snapshot.url, snapshot.analyzed_at, 45),
            HistoryEntry::new(&snapshot.url, snapshot.analyzed_at, 12),
        ];
        let text = SummaryReporter::new()
            .no_color()
            .generate_history_report(&entries)
            .unwrap();

        let lines: Vec<&str> = text.lines().skip(2).collect();
        assert!(lines[0].contains(" 85 Excellent"), "{text}");
        assert!(lines[1].contains(" 45 Fair"), "{text}");
        assert!(lines[2].contains(" 12 Needs Improvement"), "{text}");
    }

    #[test]
    fn test_details_cover_every_metric_group() {
        let mut snapshot = healthy_snapshot();
        snapshot.technical.ssl_enabled = false;
        let text = SummaryReporter::new()
            .no_color()
            .generate_analysis_report(&report_for(snapshot))
            .unwrap();

        for expected in [
            "Details:",
            "Domain authority      75",
            "Trust flow            73",
            "Keyword density       80",
            "NAP consistency       85",
            "Sitemap               Found (92)",
            "SSL                   No",
            "Mobile friendly       Yes",
            "Word count            1450",
            "Referring domains     540",
            "Distribution          640 high, 1600 medium, 960 low",
            "Completeness          95%",
            "Reviews               120 (4.6 avg)",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in\n{text}");
        }

        let details = text.find("Details:").unwrap();
        let recommendations = text.find("Recommendations (").unwrap();
        assert!(details < recommendations);
    }

    #[test]
    fn test_details_skip_missing_business_profile() {
        let mut snapshot = healthy_snapshot();
        snapshot.business_profile = None;
        let text = SummaryReporter::new()
            .no_color()
            .generate_analysis_report(&report_for(snapshot))
            .unwrap();
        assert!(text.contains("Referring domains"));
        assert!(!text.contains("Completeness"), "{text}");
    }
}
