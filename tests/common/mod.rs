//! Shared fixtures for integration tests.

#![allow(dead_code)]

use seo_insight::model::{AnalysisSnapshot, BusinessProfile};
use std::path::{Path, PathBuf};

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> AnalysisSnapshot {
    let content = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("failed to parse fixture {name}: {e}"))
}

/// A snapshot that passes every check of every rule.
pub fn healthy_snapshot() -> AnalysisSnapshot {
    load_fixture("healthy.json")
}

pub fn profile_mut(snapshot: &mut AnalysisSnapshot) -> &mut BusinessProfile {
    snapshot
        .business_profile
        .as_mut()
        .expect("fixture carries business data")
}

pub fn rule_ids(snapshot: &AnalysisSnapshot) -> Vec<String> {
    seo_insight::generate_recommendations(snapshot)
        .into_iter()
        .map(|rec| rec.rule)
        .collect()
}
