// spellmask-core/src/maskers/host.rs
//! The host pass: blanks bare hostname-shaped spans.
//!
//! This is deliberately the broadest pass, and its pattern is a superset of
//! an email's domain portion, which is why the pipeline runs it last.
//! Running it earlier would eat the domain out of an address before the
//! email pass could account for the whole thing.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use super::blank_spans;

/// Hostname shape: dotted alphanumeric/`-` labels ending in a run of letters,
/// e.g. `foobar.com` or `abc123.fo1231.biz`. Blanked whole.
pub const HOST_PATTERN: &str = r"[A-Za-z0-9-.]+\.[A-Za-z]+";

static HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(HOST_PATTERN).expect("built-in host pattern must compile")
});

/// Replaces every hostname-shaped span in `text` with an equal number of
/// spaces. The output has the same byte length as the input.
pub fn mask_hosts(text: &str) -> String {
    let spans: Vec<_> = HOST.find_iter(text).map(|m| m.range()).collect();
    blank_spans(text, &spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_bare_hostname() {
        let input = "visit foobar.com today";
        let masked = mask_hosts(input);
        assert_eq!(masked, "visit            today");
        assert_eq!(masked.len(), input.len());
    }

    #[test]
    fn masks_multi_label_hostname() {
        let masked = mask_hosts("ssh abc123.fo1231.biz ok");
        assert!(!masked.contains("biz"), "{masked:?}");
        assert_eq!(masked.len(), "ssh abc123.fo1231.biz ok".len());
    }

    #[test]
    fn bare_words_are_untouched() {
        assert_eq!(mask_hosts("nothing dotted here"), "nothing dotted here");
    }

    #[test]
    fn version_numbers_do_not_match() {
        // The final label must be letters.
        assert_eq!(mask_hosts("release 1.2.3 is out"), "release 1.2.3 is out");
    }
}
