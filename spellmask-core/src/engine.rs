// spellmask-core/src/engine.rs
//! Defines the core MaskingEngine trait.
//!
//! The `MaskingEngine` trait provides a pluggable interface over the masking
//! passes. This module defines the contract that engines must adhere to,
//! ensuring a consistent and interchangeable core API for SpellMask
//! consumers such as a tokenizer/dictionary stage.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::{MaskConfig, MaskSummaryItem};
use crate::mask_match::MaskMatch;
use crate::maskers::compiler::CompiledRules;

/// A trait that defines the core functionality of a masking engine.
///
/// This trait decouples the downstream spell-checking stages from the
/// specific implementation of the masking passes.
pub trait MaskingEngine: Send + Sync {
    /// Performs full masking on the provided content.
    ///
    /// Applies every enabled rule in configuration order, each over the
    /// previous rule's output, and returns the masked content together with
    /// a per-rule summary. The masked content always has the same byte
    /// length as `content`.
    ///
    /// # Arguments
    /// * `content` - The input string to mask.
    /// * `source_id` - The name or identifier of the source being processed.
    fn mask(&self, content: &str, source_id: &str) -> Result<(String, Vec<MaskSummaryItem>)>;

    /// Analyzes the provided content without masking it.
    ///
    /// Returns the summary that `mask` would produce, leaving the content
    /// untouched (stats mode).
    ///
    /// # Arguments
    /// * `content` - The input string to scan.
    /// * `source_id` - An identifier for the source of the content.
    fn analyze(&self, content: &str, source_id: &str) -> Result<Vec<MaskSummaryItem>>;

    /// Finds all masked spans, flattened and sorted by start offset.
    ///
    /// Offsets index the original `content`; the length-preserving passes
    /// guarantee they stay valid across pipeline stages.
    ///
    /// # Arguments
    /// * `content` - The input string to scan.
    /// * `source_id` - An identifier for the source of the content.
    fn find_matches(&self, content: &str, source_id: &str) -> Result<Vec<MaskMatch>>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's configuration.
    fn rules(&self) -> &MaskConfig;
}
