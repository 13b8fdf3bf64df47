//! The rule battery.
//!
//! Each row pairs a stable identifier and a [`RuleGroup`] with a predicate
//! that emits at most one [`Recommendation`]. Rows are evaluated in
//! declaration order and that order is the tie-break among equal priorities,
//! so reordering rows changes output.

use super::types::{Difficulty, Impact, Priority, Recommendation, RuleGroup};
use crate::model::{AnalysisSnapshot, BusinessProfile};

// Thresholds
const COMPLETENESS_TARGET: u8 = 80;
const COMPLETENESS_CRITICAL: u8 = 50;
const REVIEW_TARGET: u32 = 50;
const REVIEW_CRITICAL: u32 = 10;
const RATING_TARGET: f32 = 4.0;
const RESPONSE_RATE_TARGET: u8 = 80;
const PHOTO_TARGET: u32 = 20;
const PHOTO_CRITICAL: u32 = 5;
const PHOTO_STALE_DAYS: u32 = 90;
const POSTS_TARGET: u32 = 4;
const QUESTIONS_TARGET: u32 = 5;
const PAGE_SPEED_TARGET: u8 = 70;
const NAP_TARGET: u8 = 85;
const CITATION_TARGET: u32 = 50;
const WORD_COUNT_TARGET: u32 = 800;
const RELEVANCE_TARGET: u8 = 75;
const AUTHORITY_TARGET: u8 = 60;
const BACKLINK_QUALITY_TARGET: u8 = 70;
const TECHNICAL_TARGET: u8 = 70;
const PROXIMITY_TARGET: u8 = 70;

// Categories
const CAT_PROFILE: &str = "Business Profile";
const CAT_REVIEWS: &str = "Reviews & Reputation";
const CAT_PHOTOS: &str = "Photos & Media";
const CAT_ENGAGEMENT: &str = "Engagement & Posts";
const CAT_TECHNICAL: &str = "Technical SEO";
const CAT_LOCAL: &str = "Local SEO";
const CAT_CONTENT: &str = "Content Strategy";
const CAT_AUTHORITY: &str = "Authority Building";

type Evaluate = fn(&AnalysisSnapshot) -> Option<Recommendation>;

/// A single row of the battery.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub group: RuleGroup,
    evaluate: Evaluate,
}

impl Rule {
    const fn new(id: &'static str, group: RuleGroup, evaluate: Evaluate) -> Self {
        Self {
            id,
            group,
            evaluate,
        }
    }

    /// Evaluate this row against a snapshot. The emitted recommendation
    /// carries this row's id.
    #[must_use]
    pub fn evaluate(&self, snapshot: &AnalysisSnapshot) -> Option<Recommendation> {
        (self.evaluate)(snapshot).map(|mut rec| {
            rec.rule = self.id.to_string();
            rec
        })
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// Every rule, in evaluation order.
pub static BATTERY: &[Rule] = &[
    Rule::new("create-profile", RuleGroup::BusinessProfile, create_profile),
    Rule::new("complete-profile", RuleGroup::BusinessProfile, complete_profile),
    Rule::new("increase-reviews", RuleGroup::Reviews, increase_reviews),
    Rule::new("improve-rating", RuleGroup::Reviews, improve_rating),
    Rule::new("respond-to-reviews", RuleGroup::Reviews, respond_to_reviews),
    Rule::new("add-photos", RuleGroup::Photos, add_photos),
    Rule::new("upload-logo", RuleGroup::Photos, upload_logo),
    Rule::new("add-cover-photo", RuleGroup::Photos, add_cover_photo),
    Rule::new("recent-photos", RuleGroup::Photos, recent_photos),
    Rule::new("regular-posts", RuleGroup::Engagement, regular_posts),
    Rule::new("answer-questions", RuleGroup::Engagement, answer_questions),
    Rule::new("mobile-friendly", RuleGroup::Technical, mobile_friendly),
    Rule::new("enable-ssl", RuleGroup::Technical, enable_ssl),
    Rule::new("submit-sitemap", RuleGroup::Technical, submit_sitemap),
    Rule::new("page-speed", RuleGroup::Technical, page_speed),
    Rule::new("nap-consistency", RuleGroup::LocalSeo, nap_consistency),
    Rule::new("build-citations", RuleGroup::LocalSeo, build_citations),
    Rule::new("content-length", RuleGroup::Content, content_length),
    Rule::new("content-images", RuleGroup::Content, content_images),
    Rule::new("keyword-relevance", RuleGroup::Content, keyword_relevance),
    Rule::new("domain-authority", RuleGroup::Authority, domain_authority),
    Rule::new("backlink-quality", RuleGroup::Authority, backlink_quality),
    Rule::new("baseline-technical", RuleGroup::Baseline, baseline_technical),
    Rule::new("baseline-ssl", RuleGroup::Baseline, baseline_ssl),
    Rule::new("baseline-sitemap", RuleGroup::Baseline, baseline_sitemap),
    Rule::new("baseline-authority", RuleGroup::Baseline, baseline_authority),
    Rule::new("baseline-relevance", RuleGroup::Baseline, baseline_relevance),
    Rule::new("baseline-backlinks", RuleGroup::Baseline, baseline_backlinks),
    Rule::new("baseline-proximity", RuleGroup::Baseline, baseline_proximity),
    Rule::new("baseline-content", RuleGroup::Baseline, baseline_content),
];

fn profile(snapshot: &AnalysisSnapshot) -> Option<&BusinessProfile> {
    snapshot.business_profile.as_ref()
}

// ============================================================================
// Business profile
// ============================================================================

fn create_profile(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.has_profile {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Critical,
            "Create a Business Profile",
            "You don't have a business profile yet",
        )
        .category(CAT_PROFILE)
        .effort(Impact::High, Difficulty::Easy)
        .tips([
            "Create a free business listing with your search provider",
            "Verify the business using the code sent by mail or phone",
            "Complete all business information including address, phone, hours, and website",
            "Choose the most relevant primary category for your business",
            "A listing is essential for appearing in map and local search results",
        ]),
    )
}

fn complete_profile(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.profile_completeness_pct >= COMPLETENESS_TARGET {
        return None;
    }
    let priority = if p.profile_completeness_pct < COMPLETENESS_CRITICAL {
        Priority::Critical
    } else {
        Priority::High
    };
    let missing = p.missing_elements();
    let missing_tip = if missing.is_empty() {
        "Add missing information: review all sections".to_string()
    } else {
        format!("Add missing information: {}", missing.join(", "))
    };
    Some(
        Recommendation::new(
            priority,
            "Complete Your Business Profile",
            format!(
                "Your profile is only {}% complete",
                p.profile_completeness_pct
            ),
        )
        .category(CAT_PROFILE)
        .effort(Impact::High, Difficulty::Easy)
        .tips([
            missing_tip.as_str(),
            "Include accurate business hours, including special hours for holidays",
            "Write a compelling 750-character business description with relevant keywords",
            "Add all relevant business attributes (e.g., wheelchair accessible, free Wi-Fi)",
            "Select up to 10 business categories, with the most relevant as primary",
            "Complete profiles rank noticeably higher than incomplete ones",
        ]),
    )
}

fn increase_reviews(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.review_count >= REVIEW_TARGET {
        return None;
    }
    let priority = if p.review_count < REVIEW_CRITICAL {
        Priority::Critical
    } else {
        Priority::High
    };
    Some(
        Recommendation::new(
            priority,
            "Increase Customer Reviews",
            format!(
                "You have only {} reviews. Aim for {REVIEW_TARGET}+ reviews",
                p.review_count
            ),
        )
        .category(CAT_REVIEWS)
        .effort(Impact::VeryHigh, Difficulty::Medium)
        .tips([
            "Create a review request strategy: ask happy customers at point of sale",
            "Send follow-up emails with direct review links",
            "Make it easy: create a short link or QR code to your review page",
            "Train staff to ask for reviews professionally and consistently",
            "Never incentivize reviews, this violates platform policies",
        ]),
    )
}

fn improve_rating(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.average_rating >= RATING_TARGET || !p.has_review_sample() {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Improve Your Average Rating",
            format!(
                "Your rating is {:.1} stars. Aim for 4.5+ stars",
                p.average_rating
            ),
        )
        .category(CAT_REVIEWS)
        .effort(Impact::VeryHigh, Difficulty::Medium)
        .tips([
            "Identify common complaints in negative reviews and address them",
            "Improve service quality and customer experience systematically",
            "Focus on getting more positive reviews from satisfied customers",
            "Respond to negative reviews professionally and offer solutions",
            "Track feedback patterns and make operational improvements",
        ]),
    )
}

fn respond_to_reviews(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.review_response_rate_pct >= RESPONSE_RATE_TARGET || !p.has_review_sample() {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Respond to More Reviews",
            format!(
                "You're only responding to {}% of reviews",
                p.review_response_rate_pct
            ),
        )
        .category(CAT_REVIEWS)
        .effort(Impact::High, Difficulty::Easy)
        .tips([
            "Respond to all reviews, positive and negative, within 24-48 hours",
            "Thank customers for positive reviews and mention specific details",
            "Address negative reviews with empathy and offer to resolve issues offline",
            "Keep responses professional, personalized, and on-brand",
            "Set up email alerts for new reviews to respond quickly",
        ]),
    )
}

fn add_photos(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.photo_count >= PHOTO_TARGET {
        return None;
    }
    let priority = if p.photo_count < PHOTO_CRITICAL {
        Priority::Critical
    } else {
        Priority::High
    };
    Some(
        Recommendation::new(
            priority,
            "Add More High-Quality Photos",
            format!("You have only {} photos. Aim for 30+ photos", p.photo_count),
        )
        .category(CAT_PHOTOS)
        .effort(Impact::High, Difficulty::Easy)
        .tips([
            "Upload at least 3 photos per category: exterior, interior, products, team",
            "Add photos showing your products, services, and happy customers",
            "Upload high-resolution images (720px height minimum)",
            "Keep photos recent, upload new ones monthly",
            "Use natural lighting and professional composition",
        ]),
    )
}

fn upload_logo(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.has_logo {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Upload Your Business Logo",
            "A logo helps with brand recognition",
        )
        .category(CAT_PHOTOS)
        .effort(Impact::Medium, Difficulty::Easy)
        .tips([
            "Use a square logo (recommended: 720x720px)",
            "Ensure the logo is clear and recognizable even at small sizes",
            "Use PNG format with transparent background if possible",
        ]),
    )
}

fn add_cover_photo(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.has_cover_photo {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Add a Cover Photo",
            "Cover photos create a strong first impression",
        )
        .category(CAT_PHOTOS)
        .effort(Impact::Medium, Difficulty::Easy)
        .tips([
            "Use a high-quality, landscape-oriented image (1080x608px recommended)",
            "Show your business exterior, best products, or team",
            "Avoid text overlays and promotional content",
            "Update seasonally to keep your profile fresh",
        ]),
    )
}

fn recent_photos(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.photo_recency_days <= PHOTO_STALE_DAYS {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Upload Recent Photos",
            format!(
                "Your last photo was uploaded {} days ago",
                p.photo_recency_days
            ),
        )
        .category(CAT_PHOTOS)
        .effort(Impact::Medium, Difficulty::Easy)
        .tips([
            "Upload new photos at least once per month",
            "Recent photos signal an active, current business",
            "Show new products, seasonal offerings, or recent events",
        ]),
    )
}

fn regular_posts(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.posts_per_month >= POSTS_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Publish Regular Profile Posts",
            format!("You're only posting {} times per month", p.posts_per_month),
        )
        .category(CAT_ENGAGEMENT)
        .effort(Impact::High, Difficulty::Medium)
        .tips([
            "Post at least weekly (4-8 posts per month)",
            "Share updates, offers, events, and product launches",
            "Include a clear call-to-action (Learn more, Call now, Book)",
            "Posts expire after 7 days, so maintain consistency",
            "Include relevant keywords naturally in post content",
        ]),
    )
}

fn answer_questions(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.questions_answered >= QUESTIONS_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Answer Customer Questions",
            "Responding to Q&A builds trust and provides information",
        )
        .category(CAT_ENGAGEMENT)
        .effort(Impact::Medium, Difficulty::Easy)
        .tips([
            "Monitor the Questions & Answers section weekly",
            "Respond to all questions promptly and thoroughly",
            "Proactively add common questions and answers yourself",
            "Include helpful information like parking, accessibility, policies",
        ]),
    )
}

// ============================================================================
// Technical
// ============================================================================

fn mobile_friendly(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.technical.mobile_friendly {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Critical,
            "Make Website Mobile-Friendly",
            "Your site is not optimized for mobile devices",
        )
        .category(CAT_TECHNICAL)
        .effort(Impact::VeryHigh, Difficulty::Hard)
        .tips([
            "Implement responsive design that adapts to all screen sizes",
            "Use mobile-first design principles",
            "Ensure buttons and links are easily tappable (48x48px minimum)",
            "Avoid horizontal scrolling and pop-ups on mobile",
        ]),
    )
}

fn enable_ssl(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.technical.ssl_enabled {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Critical,
            "Enable HTTPS/SSL Certificate",
            "Your site is not secure (no HTTPS)",
        )
        .category(CAT_TECHNICAL)
        .effort(Impact::VeryHigh, Difficulty::Medium)
        .tips([
            "Install an SSL certificate from your hosting provider (often free)",
            "Use Let's Encrypt for a free SSL certificate",
            "Update all internal links to use HTTPS",
            "Set up 301 redirects from HTTP to HTTPS",
            "HTTPS is a confirmed ranking factor",
        ]),
    )
}

fn submit_sitemap(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.technical.sitemap_status.is_found() {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Create and Submit XML Sitemap",
            "Missing sitemap makes it harder for search engines to index your site",
        )
        .category(CAT_TECHNICAL)
        .effort(Impact::High, Difficulty::Easy)
        .tips([
            "Generate an XML sitemap using your CMS or a sitemap generator",
            "Submit the sitemap to the search console of each engine",
            "Include all important pages and update regularly",
            "List the sitemap location in robots.txt",
        ]),
    )
}

fn page_speed(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.technical.page_speed >= PAGE_SPEED_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Improve Page Speed",
            format!("Page speed score is {}/100", s.technical.page_speed),
        )
        .category(CAT_TECHNICAL)
        .effort(Impact::High, Difficulty::Hard)
        .tips([
            "Compress and optimize all images (use WebP format)",
            "Enable browser caching and GZIP compression",
            "Minify CSS, JavaScript, and HTML files",
            "Use a Content Delivery Network (CDN)",
            "Eliminate render-blocking resources",
        ]),
    )
}

// ============================================================================
// Local SEO
// ============================================================================

fn nap_consistency(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.nap_consistency_pct >= NAP_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Improve NAP Consistency",
            format!("NAP consistency is {}%", p.nap_consistency_pct),
        )
        .category(CAT_LOCAL)
        .effort(Impact::High, Difficulty::Medium)
        .tips([
            "Ensure Name, Address, Phone are identical everywhere online",
            "Use the exact same format across all directories and citations",
            "Update your website footer with consistent NAP information",
            "Use schema markup to structure your NAP data",
        ]),
    )
}

fn build_citations(s: &AnalysisSnapshot) -> Option<Recommendation> {
    let p = profile(s)?;
    if p.citation_count >= CITATION_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Build Local Citations",
            format!(
                "You have {} citations. Aim for 60+ quality citations",
                p.citation_count
            ),
        )
        .category(CAT_LOCAL)
        .effort(Impact::Medium, Difficulty::Medium)
        .tips([
            "List your business in industry-specific directories",
            "Add your business to local chamber of commerce websites",
            "Focus on quality over quantity, choose authoritative directories",
            "Ensure all citations have consistent NAP information",
        ]),
    )
}

// ============================================================================
// Content and relevance
// ============================================================================

fn content_length(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.content.word_count >= WORD_COUNT_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Increase Content Length",
            format!("Your pages average {} words", s.content.word_count),
        )
        .category(CAT_CONTENT)
        .effort(Impact::Medium, Difficulty::Medium)
        .tips([
            "Aim for 1,000-2,000 words on important pages",
            "Include FAQ sections addressing common customer questions",
            "Add case studies, testimonials, and success stories",
            "Create helpful, informative content that answers user intent",
        ]),
    )
}

fn content_images(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.content.has_images {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Add Images to Your Content",
            "Images improve engagement and time on page",
        )
        .category(CAT_CONTENT)
        .effort(Impact::Medium, Difficulty::Easy)
        .tips([
            "Add relevant, high-quality images to every page",
            "Use descriptive alt text with keywords",
            "Optimize image file sizes for fast loading",
        ]),
    )
}

fn keyword_relevance(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.relevance.score >= RELEVANCE_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Optimize Keyword Relevance",
            format!("Relevance score is {}/100", s.relevance.score),
        )
        .category(CAT_CONTENT)
        .effort(Impact::High, Difficulty::Medium)
        .tips([
            "Research keywords your customers actually use to find services",
            "Include location-based keywords (city, neighborhood, \"near me\")",
            "Optimize title tags, meta descriptions, and headers",
            "Use keywords naturally in content, avoid keyword stuffing",
            "Create dedicated pages for each service you offer",
        ]),
    )
}

// ============================================================================
// Authority and backlinks
// ============================================================================

fn domain_authority(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.authority.score >= AUTHORITY_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::High,
            "Build Domain Authority",
            format!("Domain authority is {}", s.authority.domain_authority),
        )
        .category(CAT_AUTHORITY)
        .effort(Impact::High, Difficulty::Hard)
        .tips([
            "Earn high-quality backlinks from authoritative websites",
            "Create link-worthy content (guides, infographics, research)",
            "Guest post on industry blogs and publications",
            "Get mentioned in local news and community websites",
        ]),
    )
}

fn backlink_quality(s: &AnalysisSnapshot) -> Option<Recommendation> {
    if s.backlinks.quality_score >= BACKLINK_QUALITY_TARGET {
        return None;
    }
    Some(
        Recommendation::new(
            Priority::Medium,
            "Improve Backlink Quality",
            format!(
                "Backlink quality score is {}/100",
                s.backlinks.quality_score
            ),
        )
        .category(CAT_AUTHORITY)
        .effort(Impact::Medium, Difficulty::Hard)
        .tips([
            "Disavow spammy or irrelevant backlinks",
            "Focus on earning links from relevant, authoritative sites",
            "Monitor your backlink profile regularly",
        ]),
    )
}

// ============================================================================
// Baseline (no business data)
// ============================================================================

fn baseline_technical(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (s.technical.score < TECHNICAL_TARGET).then(|| {
        Recommendation::new(
            Priority::High,
            "Improve Technical SEO",
            format!("Technical score is {}/100", s.technical.score),
        )
        .effort(Impact::High, Difficulty::Medium)
    })
}

fn baseline_ssl(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (!s.technical.ssl_enabled).then(|| {
        Recommendation::new(
            Priority::Critical,
            "Enable SSL Certificate",
            "Your site is served without HTTPS",
        )
        .effort(Impact::VeryHigh, Difficulty::Medium)
    })
}

fn baseline_sitemap(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (!s.technical.sitemap_status.is_found()).then(|| {
        Recommendation::new(
            Priority::High,
            "Create XML Sitemap",
            "No XML sitemap was found",
        )
        .effort(Impact::High, Difficulty::Easy)
    })
}

fn baseline_authority(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (s.authority.score < AUTHORITY_TARGET).then(|| {
        Recommendation::new(
            Priority::High,
            "Build Domain Authority",
            format!("Authority score is {}/100", s.authority.score),
        )
        .effort(Impact::High, Difficulty::Hard)
    })
}

fn baseline_relevance(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (s.relevance.score < RELEVANCE_TARGET).then(|| {
        Recommendation::new(
            Priority::Medium,
            "Improve Content Relevance",
            format!("Relevance score is {}/100", s.relevance.score),
        )
        .effort(Impact::High, Difficulty::Medium)
    })
}

fn baseline_backlinks(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (s.backlinks.quality_score < BACKLINK_QUALITY_TARGET).then(|| {
        Recommendation::new(
            Priority::Medium,
            "Improve Backlink Quality",
            format!(
                "Backlink quality score is {}/100",
                s.backlinks.quality_score
            ),
        )
        .effort(Impact::Medium, Difficulty::Hard)
    })
}

fn baseline_proximity(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (s.proximity.score < PROXIMITY_TARGET).then(|| {
        Recommendation::new(
            Priority::Medium,
            "Strengthen Local Presence",
            format!("Proximity score is {}/100", s.proximity.score),
        )
        .effort(Impact::Medium, Difficulty::Medium)
    })
}

fn baseline_content(s: &AnalysisSnapshot) -> Option<Recommendation> {
    (s.content.word_count < WORD_COUNT_TARGET).then(|| {
        Recommendation::new(
            Priority::Low,
            "Expand Page Content",
            format!("Pages average {} words", s.content.word_count),
        )
        .effort(Impact::Medium, Difficulty::Medium)
    })
}
