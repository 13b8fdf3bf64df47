#![no_main]
use libfuzzer_sys::fuzz_target;
use seo_insight::{generate_recommendations, overall_score, AnalysisSnapshot};

/// Fuzz snapshot deserialization and everything downstream of validation.
fuzz_target!(|data: &[u8]| {
    if let Ok(snapshot) = serde_json::from_slice::<AnalysisSnapshot>(data) {
        if snapshot.validate().is_ok() {
            let _ = overall_score(&snapshot);
            let recs = generate_recommendations(&snapshot);
            assert!(recs.windows(2).all(|w| w[0].priority <= w[1].priority));
        }
    }
});
