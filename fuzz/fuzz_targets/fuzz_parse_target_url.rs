#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz target URL parsing.
///
/// Accepted URLs must always be http(s) with a host.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(url) = seo_insight::parse_target_url(s) {
            assert!(matches!(url.scheme(), "http" | "https"));
            assert!(url.host_str().is_some());
        }
    }
});
