// spellmask-core/src/maskers/email.rs
//! The email pass: blanks email-shaped spans, keeping the boundary character
//! that proves the address ended.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use super::blank_spans;

/// Email shape: local part, `@`, dotted domain labels, a 2-6 letter top-level
/// label, then one non-letter boundary character. The address proper is
/// capture group 1; the boundary character is matched but never masked.
/// An address flush against end-of-input has no boundary character and does
/// not match.
pub const EMAIL_PATTERN: &str = r"([A-Za-z0-9_.%+-]+@[A-Za-z0-9-.]+\.[A-Za-z]{2,6})[^A-Za-z]";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("built-in email pattern must compile")
});

/// Replaces every email-shaped span in `text` with an equal number of spaces.
///
/// Matching is non-overlapping and left-to-right; the output has the same
/// byte length as the input.
pub fn mask_emails(text: &str) -> String {
    let spans: Vec<_> = EMAIL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|g| g.range()))
        .collect();
    blank_spans(text, &spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_email_with_plus_tag() {
        let input = "contact nickg+junk@xfoobar.com now";
        let masked = mask_emails(input);
        assert_eq!(masked, "contact                        now");
        assert_eq!(masked.len(), input.len());
    }

    #[test]
    fn trailing_boundary_character_survives() {
        assert_eq!(mask_emails("ping joe@abc.biz, thanks"), "ping            , thanks");
    }

    #[test]
    fn address_at_end_of_input_needs_a_boundary() {
        // No trailing non-letter character, no match.
        let input = "reach me at joe@abc.biz";
        assert_eq!(mask_emails(input), input);
    }

    #[test]
    fn masks_each_address_separately() {
        let input = "a@x.com b@y.org c";
        let masked = mask_emails(input);
        assert_eq!(masked, "                c");
        assert_eq!(masked.len(), input.len());
        assert!(!masked.contains('@'));
    }

    #[test]
    fn dotted_subdomains_match() {
        let masked = mask_emails("see nickg@xyz.abc123.biz ");
        assert!(!masked.contains('@'));
        assert_eq!(masked.len(), "see nickg@xyz.abc123.biz ".len());
    }

    #[test]
    fn plain_words_are_untouched() {
        assert_eq!(mask_emails("no addresses here"), "no addresses here");
    }
}
