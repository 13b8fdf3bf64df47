//! Boundary checks for producer output.
//!
//! The recommendation engine assumes every score is within its documented
//! range. Snapshots are checked here, once, before they reach the engine.

use super::{AnalysisSnapshot, BusinessProfile, KeywordMetric};
use crate::error::{Result, SeoInsightError};

/// Upper bound of the star rating scale.
pub const MAX_RATING: f32 = 5.0;

/// Most keywords a snapshot may carry.
pub const MAX_KEYWORDS: usize = 10;

const MAX_SCORE: u8 = 100;

impl AnalysisSnapshot {
    /// Check that every bounded metric lies within its documented range.
    ///
    /// All violations are reported together in a single
    /// [`SeoInsightError::Validation`].
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();

        let scores = [
            ("authority.score", self.authority.score),
            ("authority.domain_authority", self.authority.domain_authority),
            ("authority.page_authority", self.authority.page_authority),
            ("authority.trust_flow", self.authority.trust_flow),
            ("relevance.score", self.relevance.score),
            ("relevance.content_quality", self.relevance.content_quality),
            ("relevance.keyword_density", self.relevance.keyword_density),
            ("relevance.topic_match", self.relevance.topic_match),
            ("proximity.score", self.proximity.score),
            ("proximity.local_seo", self.proximity.local_seo),
            ("proximity.nap_consistency", self.proximity.nap_consistency),
            ("proximity.gmb_status", self.proximity.gmb_status),
            ("technical.score", self.technical.score),
            ("technical.meta_tags_score", self.technical.meta_tags_score),
            ("technical.sitemap_score", self.technical.sitemap_score),
            ("technical.page_speed", self.technical.page_speed),
            ("content.readability", self.content.readability),
            ("content.uniqueness", self.content.uniqueness),
            ("backlinks.quality_score", self.backlinks.quality_score),
        ];
        check_scores(&scores, &mut issues);

        if self.url.trim().is_empty() {
            issues.push("url: must not be empty".to_string());
        }

        validate_keywords(&self.keywords, &mut issues);

        if let Some(profile) = &self.business_profile {
            validate_profile(profile, &mut issues);
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(SeoInsightError::validation(format!(
                "snapshot for {} is out of range: {}",
                self.url,
                issues.join("; ")
            )))
        }
    }
}

fn validate_keywords(keywords: &[KeywordMetric], issues: &mut Vec<String>) {
    if keywords.len() > MAX_KEYWORDS {
        issues.push(format!(
            "keywords: at most {MAX_KEYWORDS} allowed, got {}",
            keywords.len()
        ));
    }
    for (i, keyword) in keywords.iter().enumerate() {
        let density = keyword.density_pct;
        if !density.is_finite() || density < 0.0 {
            issues.push(format!(
                "keywords[{i}].density_pct: must be a non-negative number, got {density}"
            ));
        }
    }
}

fn validate_profile(profile: &BusinessProfile, issues: &mut Vec<String>) {
    let scores = [
        (
            "business_profile.profile_completeness_pct",
            profile.profile_completeness_pct,
        ),
        (
            "business_profile.review_response_rate_pct",
            profile.review_response_rate_pct,
        ),
        (
            "business_profile.nap_consistency_pct",
            profile.nap_consistency_pct,
        ),
        ("business_profile.review_score", profile.review_score),
        ("business_profile.photo_score", profile.photo_score),
        ("business_profile.engagement_score", profile.engagement_score),
        ("business_profile.overall_score", profile.overall_score),
    ];
    check_scores(&scores, issues);

    let rating = profile.average_rating;
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        issues.push(format!(
            "business_profile.average_rating: must be between 0.0 and {MAX_RATING:.1}, got {rating}"
        ));
    }
}

fn check_scores(scores: &[(&str, u8)], issues: &mut Vec<String>) {
    for &(field, value) in scores {
        if value > MAX_SCORE {
            issues.push(format!("{field}: must be at most {MAX_SCORE}, got {value}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_KEYWORDS;
    use crate::error::SeoInsightError;
    use crate::model::test_support::healthy_snapshot;
    use crate::model::KeywordMetric;

    fn keyword(n: usize, density_pct: f32) -> KeywordMetric {
        KeywordMetric {
            keyword: format!("term{n}"),
            frequency: 4,
            density_pct,
        }
    }

    #[test]
    fn test_healthy_snapshot_is_valid() {
        assert!(healthy_snapshot().validate().is_ok());
    }

    #[test]
    fn test_score_above_hundred_rejected() {
        let mut snapshot = healthy_snapshot();
        snapshot.technical.page_speed = 130;
        match snapshot.validate() {
            Err(SeoInsightError::Validation(msg)) => {
                assert!(msg.contains("technical.page_speed"), "{msg}");
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_issues_reported_together() {
        let mut snapshot = healthy_snapshot();
        snapshot.authority.score = 101;
        snapshot.relevance.score = 200;
        let msg = snapshot.validate().unwrap_err().to_string();
        assert!(msg.contains("authority.score"));
        assert!(msg.contains("relevance.score"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut snapshot = healthy_snapshot();
        if let Some(profile) = snapshot.business_profile.as_mut() {
            profile.average_rating = 5.5;
        }
        assert!(snapshot.validate().is_err());

        if let Some(profile) = snapshot.business_profile.as_mut() {
            profile.average_rating = f32::NAN;
        }
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_missing_profile_is_valid() {
        let mut snapshot = healthy_snapshot();
        snapshot.business_profile = None;
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_keyword_count_capped() {
        let mut snapshot = healthy_snapshot();
        snapshot.keywords = (0..MAX_KEYWORDS).map(|n| keyword(n, 1.5)).collect();
        assert!(snapshot.validate().is_ok());

        snapshot.keywords.push(keyword(MAX_KEYWORDS, 1.5));
        let msg = snapshot.validate().unwrap_err().to_string();
        assert!(msg.contains("keywords: at most 10 allowed, got 11"), "{msg}");
    }

    #[test]
    fn test_keyword_density_must_be_finite_and_non_negative() {
        for density in [f32::NAN, f32::INFINITY, -0.5] {
            let mut snapshot = healthy_snapshot();
            snapshot.keywords = vec![keyword(0, 2.0), keyword(1, density)];
            match snapshot.validate() {
                Err(SeoInsightError::Validation(msg)) => {
                    assert!(msg.contains("keywords[1].density_pct"), "{msg}");
                }
                other => panic!("Expected Validation error for {density}, got {other:?}"),
            }
        }

        let mut snapshot = healthy_snapshot();
        snapshot.keywords = vec![keyword(0, 0.0)];
        assert!(snapshot.validate().is_ok());
    }
}
