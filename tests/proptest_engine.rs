//! Property-based tests for the recommendation engine and score aggregator.
//!
//! Snapshots are drawn from the full in-range metric space, with and without
//! business data.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use seo_insight::model::{
    AnalysisSnapshot, AuthorityMetrics, BacklinkMetrics, BusinessProfile, ContentMetrics,
    LinkDistribution, ProximityMetrics, RelevanceMetrics, SitemapStatus, TechnicalMetrics,
};
use seo_insight::recommend::{
    Priority, RecommendationEngine, RecommendationSummary, RuleSet,
};
use seo_insight::{generate_recommendations, overall_score, ScoreStatus};

fn pct() -> impl Strategy<Value = u8> {
    0u8..=100
}

prop_compose! {
    fn arb_profile()(
        flags in prop::collection::vec(any::<bool>(), 9),
        completeness in pct(),
        review_count in 0u32..300,
        rating_tenths in 0u32..=50,
        response in pct(),
        photo_count in 0u32..80,
        photo_recency_days in 0u32..400,
        posts_per_month in 0u32..10,
        questions_answered in 0u32..25,
        nap in pct(),
        citation_count in 0u32..120,
        scores in prop::collection::vec(pct(), 4),
    ) -> BusinessProfile {
        BusinessProfile {
            has_profile: flags[0],
            profile_completeness_pct: completeness,
            review_count,
            average_rating: rating_tenths as f32 / 10.0,
            review_response_rate_pct: response,
            recent_reviews: flags[1],
            photo_count,
            has_logo: flags[2],
            has_cover_photo: flags[3],
            photo_recency_days,
            photo_views_monthly: 0,
            has_business_hours: flags[4],
            has_phone_number: flags[5],
            has_website: flags[6],
            has_description: flags[7],
            has_attributes: flags[8],
            category_count: 1,
            posts_per_month,
            questions_answered,
            search_appearances: 0,
            nap_consistency_pct: nap,
            citation_count,
            review_score: scores[0],
            photo_score: scores[1],
            engagement_score: scores[2],
            overall_score: scores[3],
        }
    }
}

prop_compose! {
    fn arb_snapshot()(
        pillars in prop::collection::vec(pct(), 4),
        domain_authority in pct(),
        page_speed in pct(),
        flags in prop::collection::vec(any::<bool>(), 6),
        word_count in 0u32..3000,
        backlink_quality in pct(),
        profile in prop::option::of(arb_profile()),
    ) -> AnalysisSnapshot {
        AnalysisSnapshot {
            url: "https://prop.example/".to_string(),
            analyzed_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).single().expect("valid"),
            authority: AuthorityMetrics {
                score: pillars[0],
                domain_authority,
                page_authority: domain_authority,
                trust_flow: domain_authority,
            },
            relevance: RelevanceMetrics {
                score: pillars[1],
                content_quality: pillars[1],
                keyword_density: pillars[1],
                topic_match: pillars[1],
            },
            proximity: ProximityMetrics {
                score: pillars[2],
                local_seo: pillars[2],
                nap_consistency: pillars[2],
                gmb_status: pillars[2],
            },
            technical: TechnicalMetrics {
                score: pillars[3],
                meta_tags_score: pillars[3],
                sitemap_status: if flags[0] { SitemapStatus::Found } else { SitemapStatus::NotFound },
                sitemap_score: pillars[3],
                page_speed,
                ssl_enabled: flags[1],
                mobile_friendly: flags[2],
                has_structured_data: flags[3],
            },
            content: ContentMetrics {
                word_count,
                readability: 70,
                uniqueness: 80,
                has_images: flags[4],
                has_videos: flags[5],
                has_heading_structure: true,
            },
            backlinks: BacklinkMetrics {
                total: 1000,
                referring_domains: 100,
                do_follow_count: 500,
                quality_score: backlink_quality,
                distribution: LinkDistribution { high: 200, medium: 500, low: 300 },
            },
            keywords: Vec::new(),
            business_profile: profile,
        }
    }
}

/// Restates every row's firing condition independently of the battery.
fn expected_rules(s: &AnalysisSnapshot, extended: bool) -> BTreeSet<&'static str> {
    let t = &s.technical;
    let checks: Vec<(&'static str, bool)> = if extended {
        let mut checks = Vec::new();
        if let Some(p) = &s.business_profile {
            let sample = p.review_count > 5;
            checks.extend([
                ("create-profile", !p.has_profile),
                ("complete-profile", p.profile_completeness_pct < 80),
                ("increase-reviews", p.review_count < 50),
                ("improve-rating", p.average_rating < 4.0 && sample),
                ("respond-to-reviews", p.review_response_rate_pct < 80 && sample),
                ("add-photos", p.photo_count < 20),
                ("upload-logo", !p.has_logo),
                ("add-cover-photo", !p.has_cover_photo),
                ("recent-photos", p.photo_recency_days > 90),
                ("regular-posts", p.posts_per_month < 4),
                ("answer-questions", p.questions_answered < 5),
                ("nap-consistency", p.nap_consistency_pct < 85),
                ("build-citations", p.citation_count < 50),
            ]);
        }
        checks.extend([
            ("mobile-friendly", !t.mobile_friendly),
            ("enable-ssl", !t.ssl_enabled),
            ("submit-sitemap", t.sitemap_status != SitemapStatus::Found),
            ("page-speed", t.page_speed < 70),
            ("content-length", s.content.word_count < 800),
            ("content-images", !s.content.has_images),
            ("keyword-relevance", s.relevance.score < 75),
            ("domain-authority", s.authority.score < 60),
            ("backlink-quality", s.backlinks.quality_score < 70),
        ]);
        checks
    } else {
        vec![
            ("baseline-technical", t.score < 70),
            ("baseline-ssl", !t.ssl_enabled),
            ("baseline-sitemap", t.sitemap_status != SitemapStatus::Found),
            ("baseline-authority", s.authority.score < 60),
            ("baseline-relevance", s.relevance.score < 75),
            ("baseline-backlinks", s.backlinks.quality_score < 70),
            ("baseline-proximity", s.proximity.score < 70),
            ("baseline-content", s.content.word_count < 800),
        ]
    };
    checks
        .into_iter()
        .filter_map(|(id, fires)| fires.then_some(id))
        .collect()
}

fn fired(set: RuleSet, snapshot: &AnalysisSnapshot) -> BTreeSet<String> {
    RecommendationEngine::with_rule_set(set)
        .generate(snapshot)
        .into_iter()
        .map(|r| r.rule)
        .collect()
}

fn owned(ids: BTreeSet<&str>) -> BTreeSet<String> {
    ids.into_iter().map(str::to_string).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn generated_snapshots_are_valid(snapshot in arb_snapshot()) {
        prop_assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn output_is_sorted_by_priority(snapshot in arb_snapshot()) {
        let recs = generate_recommendations(&snapshot);
        prop_assert!(recs.windows(2).all(|w| w[0].priority.rank() <= w[1].priority.rank()));
    }

    #[test]
    fn generation_is_idempotent(snapshot in arb_snapshot()) {
        prop_assert_eq!(generate_recommendations(&snapshot), generate_recommendations(&snapshot));
    }

    #[test]
    fn each_rule_fires_at_most_once(snapshot in arb_snapshot()) {
        let recs = generate_recommendations(&snapshot);
        let mut ids: Vec<&str> = recs.iter().map(|r| r.rule.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn auto_rule_set_follows_business_data(snapshot in arb_snapshot()) {
        let recs = generate_recommendations(&snapshot);
        let baseline = recs.iter().filter(|r| r.rule.starts_with("baseline-")).count();
        if snapshot.business_profile.is_some() {
            prop_assert_eq!(baseline, 0);
        } else {
            prop_assert_eq!(baseline, recs.len());
            prop_assert!(recs.iter().all(|r| r.category.is_none()));
        }
    }

    #[test]
    fn extended_output_is_categorized(snapshot in arb_snapshot()) {
        let recs = RecommendationEngine::with_rule_set(RuleSet::Extended).generate(&snapshot);
        prop_assert!(recs.iter().all(|r| r.category.is_some()));
    }

    #[test]
    fn summary_counts_match(snapshot in arb_snapshot()) {
        let recs = generate_recommendations(&snapshot);
        let summary = RecommendationSummary::from_recommendations(&recs);
        prop_assert_eq!(summary.total, recs.len());
        let critical = recs.iter().filter(|r| r.priority == Priority::Critical).count();
        prop_assert_eq!(summary.at_or_above(Priority::Critical), critical);
    }

    #[test]
    fn overall_score_stays_between_pillars(snapshot in arb_snapshot()) {
        let pillars = snapshot.pillar_scores();
        let score = overall_score(&snapshot);
        let min = pillars.iter().copied().min().unwrap_or(0);
        let max = pillars.iter().copied().max().unwrap_or(100);
        prop_assert!(score >= min && score <= max);
        let _ = ScoreStatus::from_score(score);
    }

    #[test]
    fn status_thresholds(score in 0u8..=100) {
        let status = ScoreStatus::from_score(score);
        let expected = match score {
            80..=100 => ScoreStatus::Excellent,
            60..=79 => ScoreStatus::Good,
            40..=59 => ScoreStatus::Fair,
            _ => ScoreStatus::NeedsImprovement,
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn extended_fires_exactly_the_failing_rows(snapshot in arb_snapshot()) {
        prop_assert_eq!(
            fired(RuleSet::Extended, &snapshot),
            owned(expected_rules(&snapshot, true))
        );
    }

    #[test]
    fn minimal_fires_exactly_the_failing_rows(snapshot in arb_snapshot()) {
        prop_assert_eq!(
            fired(RuleSet::Minimal, &snapshot),
            owned(expected_rules(&snapshot, false))
        );
    }
}
