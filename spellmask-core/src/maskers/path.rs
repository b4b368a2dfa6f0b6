// spellmask-core/src/maskers/path.rs
//! The path pass: a linear scan that blanks slash-delimited, path-like spans.
//!
//! Unlike the pattern-based passes, path detection is stateful: whether a `/`
//! opens a path depends on the character in front of it, and where the span
//! ends depends on which character opened it. The scan classifies that opening
//! character into a delimiter class, then walks forward to the first matching
//! closing character. Spans with no closing character are left untouched, so
//! free text that merely contains a slash is never over-masked.
//!
//! License: MIT OR APACHE 2.0

use std::ops::Range;

use super::blank_spans;

/// Closing characters for a span opened by whitespace or another slash.
const WHITESPACE_CLOSERS: &[u8] = b" \n\r\t";
/// Closing characters for a span opened by `[`.
const BRACKET_CLOSERS: &[u8] = b"]\n";
/// Closing characters for a span opened by `(`.
const PAREN_CLOSERS: &[u8] = b")\n";

/// Maps an opening boundary character to its closing set.
///
/// Returns `None` for ordinary characters: a `/` sitting next to one of those
/// is mid-word (`"3/4 cup"`) and does not start a path.
fn closing_class(open: u8) -> Option<&'static [u8]> {
    match open {
        b'/' | b' ' | b'\n' | b'\t' | b'\r' => Some(WHITESPACE_CLOSERS),
        b'[' => Some(BRACKET_CLOSERS),
        b'(' => Some(PAREN_CLOSERS),
        _ => None,
    }
}

/// Scans `text` for path-like spans and returns their byte ranges in scan order.
///
/// The scan keeps a single offset into the input and never backtracks past it.
/// For each `/` found in the unprocessed suffix it inspects the boundary
/// character: the byte one left of the slash, or the slash itself when the
/// previous iteration consumed text right up to it. A slash at the very start
/// of the input has no preceding character and is skipped over unmasked. Once
/// a boundary is classified, the first byte of the matching closing set ends
/// the span; the closing byte itself stays unmasked and may serve as the
/// opening boundary of a later span. If the input ends before a closing byte
/// appears, the unterminated span is left unmasked.
///
/// All delimiters are ASCII, so every returned range falls on `char`
/// boundaries even when the span interior is multibyte UTF-8.
pub fn scan_path_spans(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut ofs = 0;

    while ofs < bytes.len() {
        let slash = match bytes[ofs..].iter().position(|&b| b == b'/') {
            Some(rel) => ofs + rel,
            None => break,
        };

        // Boundary candidate: one left of the slash while the unprocessed
        // region reaches that far, otherwise the slash position itself.
        let boundary = if slash > ofs { slash - 1 } else { slash };

        let closers = if slash == 0 {
            None
        } else {
            closing_class(bytes[boundary])
        };

        let Some(closers) = closers else {
            // Not a path start; emit through the slash and keep scanning.
            ofs = slash + 1;
            continue;
        };

        match bytes[boundary + 1..].iter().position(|b| closers.contains(b)) {
            Some(rel) => {
                let close = boundary + 1 + rel;
                if close > boundary + 1 {
                    spans.push(boundary + 1..close);
                }
                ofs = close;
            }
            // Unterminated span: the remainder passes through unchanged.
            None => break,
        }
    }

    spans
}

/// Replaces every path-like span in `text` with an equal number of spaces.
///
/// The output always has the same byte length as the input.
pub fn mask_paths(text: &str) -> String {
    blank_spans(text, &scan_path_spans(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_space_delimited_path() {
        let input = "see /foo/bar.go for details";
        let masked = mask_paths(input);
        assert_eq!(masked, "see             for details");
        assert_eq!(masked.len(), input.len());
    }

    #[test]
    fn leaves_mid_word_slash_alone() {
        assert_eq!(mask_paths("3/4 cup"), "3/4 cup");
        assert_eq!(mask_paths("either/or choices"), "either/or choices");
    }

    #[test]
    fn leading_slash_is_passed_through() {
        assert_eq!(mask_paths("/foo/bar baz"), "/foo/bar baz");
        assert_eq!(mask_paths("/"), "/");
    }

    #[test]
    fn unterminated_bracketed_span_is_untouched() {
        assert_eq!(mask_paths("[/missing/close"), "[/missing/close");
    }

    #[test]
    fn bracketed_path_masks_up_to_bracket() {
        let input = "see [/foo/bar] now";
        assert_eq!(mask_paths(input), "see [        ] now");
    }

    #[test]
    fn parenthesized_path_masks_up_to_paren() {
        let input = "link (/static/img.png) here";
        assert_eq!(mask_paths(input), "link (               ) here");
    }

    #[test]
    fn newline_terminates_span() {
        let input = "load /etc/hosts\nnext line";
        assert_eq!(mask_paths(input), "load           \nnext line");
    }

    #[test]
    fn bare_slash_between_spaces_is_blanked() {
        assert_eq!(mask_paths("x / y"), "x   y");
    }

    #[test]
    fn slash_after_slash_opens_whitespace_span() {
        // The second slash of "a//" starts the unprocessed suffix, so the
        // first slash is its boundary; the span closes immediately at the
        // space and nothing is blanked.
        assert_eq!(mask_paths("a// b"), "a// b");
    }

    #[test]
    fn masks_multiple_paths_on_one_line() {
        let input = "cp /a/b /c/d now";
        assert_eq!(mask_paths(input), "cp           now");
    }

    #[test]
    fn multibyte_span_blanks_one_space_per_byte() {
        let input = "see /tmp/über.txt now";
        let masked = mask_paths(input);
        assert_eq!(masked.len(), input.len());
        assert_eq!(masked, "see                now");
    }

    #[test]
    fn length_is_always_preserved() {
        for input in [
            "",
            "/",
            "a/b",
            "see /foo/bar.go for details",
            "[/x/y] (/a/b) /lead tail/",
            "no slashes at all",
            "trailing /unterminated",
        ] {
            assert_eq!(mask_paths(input).len(), input.len(), "input: {input:?}");
        }
    }
}
