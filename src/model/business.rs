//! Business profile (local listing) metrics.

use serde::{Deserialize, Serialize};

/// Minimum number of reviews before rating-based signals are meaningful.
pub const MIN_REVIEW_SAMPLE: u32 = 5;

/// Local business listing metrics.
///
/// Present only in the extended analysis. `has_profile == false` still carries
/// numbers (a partial listing scraped from citations), which is why the
/// "create profile" and "complete profile" rules can both fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub has_profile: bool,
    pub profile_completeness_pct: u8,

    // Reviews
    pub review_count: u32,
    /// Average star rating, 0.0 to 5.0
    pub average_rating: f32,
    pub review_response_rate_pct: u8,
    pub recent_reviews: bool,

    // Photos
    pub photo_count: u32,
    pub has_logo: bool,
    pub has_cover_photo: bool,
    /// Days since the last photo upload
    pub photo_recency_days: u32,
    pub photo_views_monthly: u32,

    // Listing details
    pub has_business_hours: bool,
    pub has_phone_number: bool,
    pub has_website: bool,
    pub has_description: bool,
    pub has_attributes: bool,
    pub category_count: u8,

    // Engagement
    pub posts_per_month: u32,
    pub questions_answered: u32,
    pub search_appearances: u32,

    // Citations
    pub nap_consistency_pct: u8,
    pub citation_count: u32,

    // Derived
    pub review_score: u8,
    pub photo_score: u8,
    pub engagement_score: u8,
    pub overall_score: u8,
}

impl BusinessProfile {
    /// Whether enough reviews exist for rating signals to be trusted.
    #[must_use]
    pub const fn has_review_sample(&self) -> bool {
        self.review_count > MIN_REVIEW_SAMPLE
    }

    /// Human-readable names of the listing fields that are still missing.
    #[must_use]
    pub fn missing_elements(&self) -> Vec<&'static str> {
        [
            (self.has_business_hours, "business hours"),
            (self.has_phone_number, "phone number"),
            (self.has_website, "website URL"),
            (self.has_description, "business description"),
            (self.has_attributes, "business attributes"),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::complete_profile;

    #[test]
    fn test_missing_elements_empty_for_complete_listing() {
        assert!(complete_profile().missing_elements().is_empty());
    }

    #[test]
    fn test_missing_elements_keeps_listing_order() {
        let mut profile = complete_profile();
        profile.has_website = false;
        profile.has_business_hours = false;
        assert_eq!(
            profile.missing_elements(),
            vec!["business hours", "website URL"]
        );
    }

    #[test]
    fn test_review_sample_threshold() {
        let mut profile = complete_profile();
        profile.review_count = MIN_REVIEW_SAMPLE;
        assert!(!profile.has_review_sample());
        profile.review_count = MIN_REVIEW_SAMPLE + 1;
        assert!(profile.has_review_sample());
    }
}
