// spellmask-core/src/maskers/url.rs
//! The URL pass: blanks whole http/https/ftp URLs.
//!
//! A URL contains both slashes and a hostname, so this pass runs before the
//! path scanner and the host pattern get a chance to take bites out of one.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use super::blank_spans;

/// URL shape, case-insensitive: scheme, `://`, dotted host text, optional
/// path up to whitespace. All groups are non-capturing so the masked span is
/// always the whole match.
pub const URL_PATTERN: &str = r"(?i)(?:https?|ftp)://(?:-\.)?(?:[^\s/?\.#]+\.?)+(?:/[^\s]*)?";

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(URL_PATTERN).expect("built-in url pattern must compile")
});

/// Replaces every URL in `text` with an equal number of spaces. The output
/// has the same byte length as the input.
pub fn mask_urls(text: &str) -> String {
    let spans: Vec<_> = URL.find_iter(text).map(|m| m.range()).collect();
    blank_spans(text, &spans)
}
