//! Target URL parsing.

use crate::error::{Result, SeoInsightError};
use url::Url;

/// Parse the URL a user asked to analyze.
///
/// Only `http` and `https` URLs with a host are accepted. Input without a
/// scheme (`example.com/shop`) is retried with `https://` in front.
pub fn parse_target_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SeoInsightError::invalid_url(input, "empty URL"));
    }

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => return parse_with_https(input, trimmed),
        Err(e) => return Err(SeoInsightError::invalid_url(input, e.to_string())),
    };

    if !matches!(url.scheme(), "http" | "https") {
        if looks_like_host_and_port(trimmed, url.scheme()) {
            return parse_with_https(input, trimmed);
        }
        return Err(SeoInsightError::invalid_url(
            input,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(SeoInsightError::invalid_url(input, "missing host")),
    }
}

/// `example.com:8080` parses with scheme "example.com".
fn looks_like_host_and_port(input: &str, scheme: &str) -> bool {
    if input.contains("://") {
        return false;
    }
    let rest = &input[scheme.len() + 1..];
    scheme.contains('.') || rest.starts_with(|c: char| c.is_ascii_digit())
}

fn parse_with_https(input: &str, trimmed: &str) -> Result<Url> {
    let url = Url::parse(&format!("https://{trimmed}"))
        .map_err(|e| SeoInsightError::invalid_url(input, e.to_string()))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(SeoInsightError::invalid_url(input, "missing host")),
    }
}
