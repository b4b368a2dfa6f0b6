//! The masking passes for SpellMask.
//!
//! Each pass is a pure function from input text to output text of identical
//! byte length: every recognized span is replaced by an equal number of space
//! characters, never removed, so byte offsets computed against the original
//! input stay valid after any number of passes. `mask_not_words` composes the
//! passes in their fixed pipeline order.
//!
//! This module works closely with `compiler` (for the config-driven form of
//! the same passes) and `engines::pipeline_engine` (which applies them with
//! match reporting).

pub mod compiler;
pub mod email;
pub mod host;
pub mod path;
pub mod url;

use std::ops::Range;

/// Splices `text`, replacing each span with spaces, one per byte.
///
/// Spans must be non-overlapping, in ascending order, and fall on `char`
/// boundaries; every scanner and pattern in this crate produces spans that
/// satisfy all three. The output has the same byte length as the input.
pub(crate) fn blank_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push_str(&" ".repeat(span.end - span.start));
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Blanks everything in `text` that a spell checker should not see as words.
///
/// Applies the four passes in their fixed order (URLs, then paths, then
/// emails, then hosts), each over the previous pass's output. The URL pass
/// runs first because a URL contains both slashes and a hostname and must be
/// consumed whole; the host pass runs last because its pattern is a superset
/// of an email's domain portion. The output always has the same byte length
/// as the input, and this function cannot fail: text that matches no pass is
/// returned unchanged.
pub fn mask_not_words(text: &str) -> String {
    host::mask_hosts(&email::mask_emails(&path::mask_paths(&url::mask_urls(text))))
}
