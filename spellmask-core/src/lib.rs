// spellmask-core/src/lib.rs
//! # SpellMask Core Library
//!
//! `spellmask-core` provides the fundamental, platform-independent logic for
//! masking non-word content (file-system paths, email addresses, bare
//! hostnames, and URLs) ahead of a spell-checking stage, so the downstream
//! tokenizer/dictionary lookup does not flag them as misspellings.
//!
//! The defining constraint is that masking preserves the exact byte length
//! and positions of the original text: every masked substring is replaced by
//! an equal number of space characters, never removed, so line/column
//! offsets computed later remain valid. The library is pure and stateless,
//! focusing solely on the transformation of input text, without concerns for
//! I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `MaskRule`s and `MaskConfig` for specifying the passes.
//! * `maskers`: The pass implementations: the path scanner, the pattern
//!   passes, rule compilation, and the fixed `mask_not_words` pipeline.
//! * `mask_match`: Defines data structures for detailed reporting of masked spans.
//! * `engine`: Defines the `MaskingEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `MaskingEngine` trait.
//! * `headless`: Convenience wrapper for one-shot, non-interactive masking.
//! * `errors`: The library's structured error type.
//!
//! ## Public API
//!
//! **Fixed pipeline**
//!
//! * [`mask_not_words`]: Blanks everything a spell checker should skip, in the
//!   fixed pass order. Infallible, same-length output.
//! * [`mask_urls`], [`mask_paths`], [`mask_emails`], [`mask_hosts`]: The
//!   individual passes, each a pure function.
//!
//! **Configuration & Rules**
//!
//! * [`MaskConfig`]: Manages an ordered collection of `MaskRule`s, including
//!   loading, merging, and filtering.
//! * [`MaskRule`]: Defines a single pass over the text.
//! * [`merge_rules`]: Merges default and user-defined configurations,
//!   preserving application order.
//! * [`MaskConfig::load_from_file`]: Loads rules from a YAML file.
//! * [`MaskConfig::load_default_rules`]: Loads the built-in rule set.
//!
//! **Masking Engine**
//!
//! * [`MaskingEngine`]: A trait for pluggable masking implementations.
//! * [`PipelineEngine`]: The concrete implementation that applies rules
//!   sequentially in configuration order.
//! * [`headless_mask_string`]: A convenience function for a full, one-shot
//!   masking with a custom configuration.
//!
//! **Reporting**
//!
//! * [`MaskMatch`]: A detailed record of a single masked span, with offsets
//!   that index the original input.
//! * [`MaskSummaryItem`]: A per-rule roll-up of all masked spans.
//!
//! ## Usage Example
//!
//! ```rust
//! use spellmask_core::{mask_not_words, headless_mask_string, MaskConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // The fixed pipeline needs no configuration.
//!     let input = "see /foo/bar.go or visit foobar.com today";
//!     let masked = mask_not_words(input);
//!     assert_eq!(masked.len(), input.len());
//!     assert!(!masked.contains("foobar.com"));
//!
//!     // The engine form takes a rule configuration.
//!     let config = MaskConfig::load_default_rules()?;
//!     let masked = headless_mask_string(config, input, "notes.txt")?;
//!     assert_eq!(masked.len(), input.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The masking passes never fail: every input, including empty strings and
//! text with unmatched delimiters, produces a same-length output via the
//! "leave unchanged" fallback. Fallible operations exist only at the
//! configuration edges and use `anyhow::Error`, with structured variants in
//! [`MaskError`] for programmatic handling.
//!
//! ## Design Principles
//!
//! * **Length preservation:** Every pass returns output of identical byte
//!   length, so offsets survive the whole pipeline.
//! * **Stateless:** No cross-call state; safe to invoke concurrently on
//!   independent inputs.
//! * **Pluggable:** The `MaskingEngine` trait allows alternative masking
//!   implementations behind a stable seam.
//! * **Conservative:** Unterminated or ambiguous spans are left unmasked;
//!   under-masking beats suppressing legitimate words downstream.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod mask_match;
pub mod maskers;

// Correctly re-exporting modules and types from their canonical locations.
// This ensures the public API is clean and well-defined.

/// Re-exports the public configuration types and functions for managing mask rules.
pub use config::{merge_rules, MaskConfig, MaskRule, MaskSummaryItem, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MaskError;

/// Re-exports the core masking engine trait.
pub use engine::MaskingEngine;

/// Re-exports the concrete `PipelineEngine` implementation.
pub use engines::pipeline_engine::PipelineEngine;

/// Re-exports types for detailed span reporting.
pub use mask_match::{redact_sensitive, MaskMatch};

/// Re-exports the fixed pipeline and the individual passes.
pub use maskers::mask_not_words;
pub use maskers::{email::mask_emails, host::mask_hosts, path::mask_paths, url::mask_urls};

/// Re-exports the one-shot, non-interactive entry point.
pub use headless::headless_mask_string;

// Re-export key types from the maskers::compiler module for advanced usage.
pub use maskers::compiler::{compile_rules, CompiledRule, CompiledRules};
