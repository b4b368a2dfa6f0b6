// spellmask-core/src/mask_match.rs
//! Provides core data structures and utility functions for reporting masked
//! spans within the `spellmask-core` library.
//!
//! Because every pass preserves byte length, the offsets recorded here are
//! valid indices into the original input even when the match was found in an
//! intermediate pipeline stage.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// A static boolean that is initialized once to determine if matched text
    /// may appear verbatim in debug logs. Paths, addresses and hostnames are
    /// exactly the kind of content a log file should not collect by accident.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SPELLMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Represents a single masked span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MaskMatch {
    /// Name of the rule that claimed the span.
    pub rule_name: String,
    /// The text that was blanked, sliced from the original input.
    pub original_string: String,
    /// Start byte offset in the original input.
    pub start: u64,
    /// End byte offset (exclusive) in the original input.
    pub end: u64,
    /// 1-based line number of the span's start.
    #[serde(default)]
    pub line_number: Option<u64>,
    /// Identifier of the input source (e.g., a file path).
    #[serde(default)]
    pub source_id: String,
}

/// Returns a placeholder suitable for logging in place of matched text.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

/// Logs one masked span at debug level, redacting the matched text unless the
/// `SPELLMASK_ALLOW_DEBUG_PII` environment gate is set.
pub fn log_mask_match_debug(module_path: &str, rule_name: &str, matched_content: &str) {
    debug!(
        target: "spellmask_core::mask_match",
        "[{}] Rule '{}' masked: {}",
        module_path,
        rule_name,
        get_loggable_content(matched_content)
    );
}
