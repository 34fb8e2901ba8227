// Profile URL validation and username extraction.
//
// Validation is anchored per platform: hostname plus one path segment in
// the platform's username alphabet. Extraction is deliberately lenient —
// it takes the last non-empty path segment so it works on partially typed
// URLs before they validate.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::platform::Platform;

fn pattern(platform: Platform) -> &'static Regex {
    static TWITTER: OnceLock<Regex> = OnceLock::new();
    static INSTAGRAM: OnceLock<Regex> = OnceLock::new();
    static FACEBOOK: OnceLock<Regex> = OnceLock::new();

    let (cell, pattern) = match platform {
        Platform::Twitter => (
            &TWITTER,
            r"^https?://(www\.)?(twitter\.com|x\.com)/[a-zA-Z0-9_]{1,15}/?$",
        ),
        Platform::Instagram => (
            &INSTAGRAM,
            r"^https?://(www\.)?instagram\.com/[a-zA-Z0-9_.]{1,30}/?$",
        ),
        Platform::Facebook => (
            &FACEBOOK,
            r"^https?://(www\.)?facebook\.com/[a-zA-Z0-9.]{1,50}/?$",
        ),
    };
    cell.get_or_init(|| Regex::new(pattern).expect("hard-coded URL pattern compiles"))
}

/// Whether `url` looks like a profile URL on the given platform.
pub fn validate_profile_url(url: &str, platform: Platform) -> bool {
    !url.is_empty() && pattern(platform).is_match(url)
}

/// Extract a candidate username from a profile URL.
///
/// Takes the last non-empty path segment and strips a leading `@`.
/// Returns `None` when nothing usable remains.
pub fn extract_username(url: &str) -> Option<String> {
    let segment = url.split('/').rev().find(|s| !s.is_empty())?;
    let name = segment.strip_prefix('@').unwrap_or(segment);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Example URLs shown when validation fails.
pub fn url_examples(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Twitter => &["https://twitter.com/username", "https://x.com/username"],
        Platform::Instagram => &["https://instagram.com/username"],
        Platform::Facebook => &["https://facebook.com/username"],
    }
}
