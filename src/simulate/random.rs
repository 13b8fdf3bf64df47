//! Randomized placeholder metrics.
//!
//! Distributions loosely model what a real crawl might report. Every value is
//! clamped to its documented range before it leaves this module.

use super::SnapshotSource;
use crate::error::{Result, SeoInsightError, SnapshotErrorKind};
use crate::model::{
    AnalysisSnapshot, AuthorityMetrics, BacklinkMetrics, BusinessProfile, ContentMetrics,
    KeywordMetric, LinkDistribution, ProximityMetrics, RelevanceMetrics, SitemapStatus,
    TechnicalMetrics, MAX_KEYWORDS,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use url::Url;

const PREMIUM_TLDS: &[&str] = &[".com", ".org", ".net", ".edu", ".gov"];
const STRIPPED_TLDS: &[&str] = &[".com", ".org", ".net", ".io", ".co", ".ai"];
const GENERIC_KEYWORDS: &[&str] = &["services", "business", "professional", "quality", "solutions"];

/// Snapshot producer backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    rng: StdRng,
}

impl SimulatedSource {
    /// Reproducible producer: the same seed yields the same metrics.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Producer seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// `base + unit * spread`
    fn spread(&mut self, base: f64, spread: f64) -> f64 {
        base + self.unit() * spread
    }

    fn chance(&mut self, threshold: f64) -> bool {
        self.unit() > threshold
    }

    fn domain_age_years(&mut self, host: &str) -> f64 {
        if PREMIUM_TLDS.iter().any(|tld| host.ends_with(tld)) {
            self.spread(3.0, 7.0)
        } else {
            self.spread(1.0, 4.0)
        }
    }

    fn authority(&mut self, host: &str, ssl: bool) -> AuthorityMetrics {
        let age = self.domain_age_years(host);
        let ssl_bonus = if ssl { 15.0 } else { 0.0 };
        let domain = (30.0 + age * 5.0 + ssl_bonus + self.unit() * 30.0).min(100.0);
        let page = domain * self.spread(0.7, 0.3);
        let trust = (domain * 0.8 + self.unit() * 20.0).min(100.0);

        AuthorityMetrics {
            score: pct((domain + page + trust) / 3.0),
            domain_authority: pct(domain),
            page_authority: pct(page),
            trust_flow: pct(trust),
        }
    }

    fn relevance(&mut self) -> RelevanceMetrics {
        let quality = self.spread(60.0, 35.0);
        let density = self.spread(50.0, 40.0);
        let topic = self.spread(55.0, 40.0);

        RelevanceMetrics {
            score: pct((quality + density + topic) / 3.0),
            content_quality: pct(quality),
            keyword_density: pct(density),
            topic_match: pct(topic),
        }
    }

    fn proximity(&mut self) -> ProximityMetrics {
        let local = if self.chance(0.5) {
            self.spread(70.0, 25.0)
        } else {
            self.spread(40.0, 30.0)
        };
        let nap = self.spread(60.0, 35.0);
        let gmb = if self.chance(0.3) {
            self.spread(80.0, 20.0)
        } else {
            self.spread(40.0, 30.0)
        };

        ProximityMetrics {
            score: pct((local + nap + gmb) / 3.0),
            local_seo: pct(local),
            nap_consistency: pct(nap),
            gmb_status: pct(gmb),
        }
    }

    fn technical(&mut self, ssl: bool) -> TechnicalMetrics {
        let meta = self.spread(70.0, 25.0);
        let has_sitemap = self.chance(0.4);
        let sitemap = if has_sitemap {
            self.spread(85.0, 15.0)
        } else {
            self.spread(30.0, 20.0)
        };
        let speed = self.spread(50.0, 45.0);

        TechnicalMetrics {
            score: pct((meta + sitemap + speed) / 3.0),
            meta_tags_score: pct(meta),
            sitemap_status: if has_sitemap {
                SitemapStatus::Found
            } else {
                SitemapStatus::NotFound
            },
            sitemap_score: pct(sitemap),
            page_speed: pct(speed),
            ssl_enabled: ssl,
            mobile_friendly: self.chance(0.3),
            has_structured_data: self.chance(0.5),
        }
    }

    fn keywords(&mut self, host: &str) -> Vec<KeywordMetric> {
        let stem = STRIPPED_TLDS
            .iter()
            .fold(host.to_string(), |acc, tld| acc.replace(tld, ""));

        let mut keywords: Vec<KeywordMetric> = stem
            .split(['.', '-'])
            .filter(|word| word.len() > 2)
            .map(|word| KeywordMetric {
                keyword: word.to_string(),
                frequency: self.rng.gen_range(10..60),
                density_pct: one_decimal(self.spread(1.0, 4.0) as f32),
            })
            .collect();

        for _ in 0..3 {
            let word = GENERIC_KEYWORDS[self.rng.gen_range(0..GENERIC_KEYWORDS.len())];
            keywords.push(KeywordMetric {
                keyword: word.to_string(),
                frequency: self.rng.gen_range(5..35),
                density_pct: one_decimal(self.spread(0.5, 2.0) as f32),
            });
        }

        keywords.truncate(MAX_KEYWORDS);
        keywords
    }

    fn backlinks(&mut self) -> BacklinkMetrics {
        let total = self.spread(100.0, 10_000.0).floor();
        let referring = (total * self.spread(0.1, 0.2)).floor();
        let do_follow = (total * self.spread(0.4, 0.3)).floor();
        let quality = self.spread(50.0, 45.0);

        BacklinkMetrics {
            total: total as u32,
            referring_domains: referring as u32,
            do_follow_count: do_follow as u32,
            quality_score: pct(quality),
            distribution: LinkDistribution {
                high: (total * 0.2).floor() as u32,
                medium: (total * 0.5).floor() as u32,
                low: (total * 0.3).floor() as u32,
            },
        }
    }

    fn content(&mut self) -> ContentMetrics {
        ContentMetrics {
            word_count: 500 + (self.unit() * 2000.0).floor() as u32,
            readability: pct(self.spread(60.0, 35.0)),
            uniqueness: pct(self.spread(70.0, 25.0)),
            has_images: self.chance(0.5),
            has_videos: self.chance(0.6),
            has_heading_structure: self.chance(0.4),
        }
    }

    fn business_profile(&mut self) -> BusinessProfile {
        let listed = self.chance(0.2);
        let completeness = if listed {
            self.spread(60.0, 35.0)
        } else {
            self.spread(20.0, 30.0)
        };

        // Reviews
        let review_count = if listed {
            self.spread(10.0, 200.0).floor()
        } else {
            (self.unit() * 10.0).floor()
        };
        let rating = if listed {
            one_decimal(self.spread(3.5, 1.5) as f32)
        } else {
            0.0
        };
        let response_rate = if listed { self.unit() * 100.0 } else { 0.0 };
        let recent_reviews = listed && self.chance(0.4);

        // Photos
        let photo_count = if listed {
            self.spread(5.0, 50.0).floor()
        } else {
            0.0
        };
        let has_logo = listed && self.chance(0.2);
        let has_cover_photo = listed && self.chance(0.3);
        let photo_recency = if listed {
            self.spread(30.0, 335.0)
        } else {
            0.0
        };

        // Listing details
        let has_business_hours = listed && self.chance(0.15);
        let has_phone_number = listed && self.chance(0.1);
        let has_website = self.chance(0.2);
        let has_description = listed && self.chance(0.25);
        let category_count = if listed {
            self.rng.gen_range(1..=3)
        } else {
            0
        };
        let has_attributes = listed && self.chance(0.4);

        // Engagement
        let posts = if listed { self.rng.gen_range(0..8) } else { 0 };
        let questions = if listed { self.rng.gen_range(0..20) } else { 0 };
        let photo_views = if listed {
            self.rng.gen_range(100..5_100)
        } else {
            0
        };
        let search_appearances = if listed {
            self.rng.gen_range(500..10_500)
        } else {
            0
        };

        // Citations
        let nap = self.spread(60.0, 35.0);
        let citations = self.rng.gen_range(10..110);

        let review_score =
            (review_count / 2.0 + f64::from(rating) * 15.0 + response_rate * 0.3).min(100.0);
        let recency_bonus = if photo_recency < 30.0 {
            20.0
        } else if photo_recency < 90.0 {
            10.0
        } else {
            0.0
        };
        let photo_score = (photo_count * 1.5
            + if has_logo { 15.0 } else { 0.0 }
            + if has_cover_photo { 15.0 } else { 0.0 }
            + recency_bonus)
            .min(100.0);
        let engagement_score = (f64::from(posts) * 8.0
            + f64::from(questions) * 2.0
            + f64::from(photo_views) / 100.0)
            .min(100.0);

        BusinessProfile {
            has_profile: listed,
            profile_completeness_pct: pct(completeness),
            review_count: review_count as u32,
            average_rating: rating,
            review_response_rate_pct: pct(response_rate),
            recent_reviews,
            photo_count: photo_count as u32,
            has_logo,
            has_cover_photo,
            photo_recency_days: photo_recency.round() as u32,
            photo_views_monthly: photo_views,
            has_business_hours,
            has_phone_number,
            has_website,
            has_description,
            has_attributes,
            category_count,
            posts_per_month: posts,
            questions_answered: questions,
            search_appearances,
            nap_consistency_pct: pct(nap),
            citation_count: citations,
            review_score: pct(review_score),
            photo_score: pct(photo_score),
            engagement_score: pct(engagement_score),
            overall_score: pct(
                (review_score + photo_score + completeness + engagement_score) / 4.0,
            ),
        }
    }
}

impl SnapshotSource for SimulatedSource {
    fn produce(&mut self, url: &Url) -> Result<AnalysisSnapshot> {
        let host = url
            .host_str()
            .ok_or_else(|| {
                SeoInsightError::snapshot(
                    "simulating metrics",
                    SnapshotErrorKind::MissingHost(url.to_string()),
                )
            })?
            .to_string();
        let ssl = url.scheme() == "https";

        tracing::debug!(host = %host, ssl, "simulating snapshot");

        Ok(AnalysisSnapshot {
            url: url.to_string(),
            analyzed_at: Utc::now(),
            authority: self.authority(&host, ssl),
            relevance: self.relevance(),
            proximity: self.proximity(),
            technical: self.technical(ssl),
            keywords: self.keywords(&host),
            backlinks: self.backlinks(),
            content: self.content(),
            business_profile: Some(self.business_profile()),
        })
    }
}

/// Round and clamp to a 0-100 score.
fn pct(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn one_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
