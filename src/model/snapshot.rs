//! The analysis snapshot: every metric collected for one analyzed URL.

use super::business::BusinessProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete set of metrics for one analyzed URL.
///
/// A snapshot is produced once per analysis run and never mutated afterwards.
/// The recommendation engine and the score aggregator only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// The analyzed URL, normalized
    pub url: String,
    /// When the snapshot was produced
    pub analyzed_at: DateTime<Utc>,
    pub authority: AuthorityMetrics,
    pub relevance: RelevanceMetrics,
    pub proximity: ProximityMetrics,
    pub technical: TechnicalMetrics,
    pub content: ContentMetrics,
    pub backlinks: BacklinkMetrics,
    /// Top keywords found on the page (at most ten)
    #[serde(default)]
    pub keywords: Vec<KeywordMetric>,
    /// Business profile data; `None` when the producer has none to offer
    #[serde(default)]
    pub business_profile: Option<BusinessProfile>,
}

impl AnalysisSnapshot {
    /// The four pillar scores in display order: authority, relevance,
    /// proximity, technical.
    #[must_use]
    pub const fn pillar_scores(&self) -> [u8; 4] {
        [
            self.authority.score,
            self.relevance.score,
            self.proximity.score,
            self.technical.score,
        ]
    }
}

/// Domain and page authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityMetrics {
    pub score: u8,
    pub domain_authority: u8,
    pub page_authority: u8,
    pub trust_flow: u8,
}

/// Topical relevance of the page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelevanceMetrics {
    pub score: u8,
    pub content_quality: u8,
    pub keyword_density: u8,
    pub topic_match: u8,
}

/// Local-search proximity signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityMetrics {
    pub score: u8,
    pub local_seo: u8,
    pub nap_consistency: u8,
    pub gmb_status: u8,
}

/// Whether an XML sitemap was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SitemapStatus {
    Found,
    NotFound,
}

impl SitemapStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Found => "Found",
            Self::NotFound => "Not Found",
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

impl std::fmt::Display for SitemapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Technical SEO signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalMetrics {
    pub score: u8,
    pub meta_tags_score: u8,
    pub sitemap_status: SitemapStatus,
    pub sitemap_score: u8,
    pub page_speed: u8,
    pub ssl_enabled: bool,
    pub mobile_friendly: bool,
    pub has_structured_data: bool,
}

/// On-page content signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub word_count: u32,
    pub readability: u8,
    pub uniqueness: u8,
    pub has_images: bool,
    pub has_videos: bool,
    pub has_heading_structure: bool,
}

/// Backlink quality bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkDistribution {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// Inbound link profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklinkMetrics {
    pub total: u32,
    pub referring_domains: u32,
    pub do_follow_count: u32,
    pub quality_score: u8,
    pub distribution: LinkDistribution,
}

/// A keyword and how often it appears on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetric {
    pub keyword: String,
    pub frequency: u32,
    /// Share of page words, in percent
    pub density_pct: f32,
}
