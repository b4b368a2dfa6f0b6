//! compiler.rs - Manages the compilation and caching of mask rules.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `MaskConfig` into `CompiledRules`, which are optimized for efficient
//! masking. It uses a global, shared cache so the built-in rule set is
//! compiled exactly once per process; after insertion the cached entries are
//! read-only.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::sync::{Arc, RwLock};

use crate::config::{MaskConfig, MaskRule, MAX_PATTERN_LENGTH};
use crate::errors::MaskError;
use crate::maskers::path;

/// The name of the one built-in scanner pass.
pub const PATH_SCANNER: &str = "path";

/// How a compiled rule finds its spans.
#[derive(Debug)]
pub enum CompiledPass {
    /// A compiled regular expression. If the pattern contains a capture
    /// group 1, the masked span is that group; otherwise the whole match.
    Regex(Regex),
    /// The boundary-class path scanner.
    PathScanner,
}

/// Represents a single compiled mask rule, ready for efficient application.
#[derive(Debug)]
pub struct CompiledRule {
    /// The unique name of the mask rule.
    pub name: String,
    /// The span finder this rule compiled down to.
    pub pass: CompiledPass,
}

impl CompiledRule {
    /// Returns the byte ranges this rule would mask in `text`, in ascending
    /// order. Never fails; text the rule does not recognize yields no spans.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        match &self.pass {
            CompiledPass::PathScanner => path::scan_path_spans(text),
            CompiledPass::Regex(regex) => regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)).map(|m| m.range()))
                .collect(),
        }
    }
}

/// Represents the full set of compiled rules for one configuration.
#[derive(Debug)]
pub struct CompiledRules {
    /// Compiled rules in application order.
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the `MaskConfig`'s rules.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `MaskConfig` to create a stable, unique key for the cache.
///
/// The rules are sorted by name before hashing so the key is deterministic;
/// application order is preserved separately by `CompiledRules`.
fn hash_config(config: &MaskConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    let mut rules_to_hash = config.rules.clone();
    rules_to_hash.sort_by(|a, b| a.name.cmp(&b.name));
    rules_to_hash.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `MaskRule`s into `CompiledRules`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_rules(rules_to_compile: Vec<MaskRule>) -> Result<CompiledRules, MaskError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        if rule.pattern_type == "scanner" {
            if rule.name == PATH_SCANNER {
                compiled_rules.push(CompiledRule {
                    name: rule.name,
                    pass: CompiledPass::PathScanner,
                });
            } else {
                compilation_errors.push(MaskError::UnknownScanner(rule.name));
            }
            continue;
        }

        match rule.pattern.as_ref() {
            Some(pattern) => {
                debug!(
                    "Attempting to compile rule: '{}' with pattern '{:?}'",
                    &rule.name, pattern
                );

                if pattern.len() > MAX_PATTERN_LENGTH {
                    compilation_errors.push(MaskError::PatternLengthExceeded(
                        rule.name,
                        pattern.len(),
                        MAX_PATTERN_LENGTH,
                    ));
                    continue;
                }

                let regex_result = RegexBuilder::new(pattern)
                    .multi_line(rule.multiline)
                    .dot_matches_new_line(rule.dot_matches_new_line)
                    .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
                    .build();

                match regex_result {
                    Ok(regex) => {
                        debug!("Rule '{}' compiled successfully.", &rule.name);
                        compiled_rules.push(CompiledRule {
                            name: rule.name,
                            pass: CompiledPass::Regex(regex),
                        });
                    }
                    Err(e) => {
                        compilation_errors.push(MaskError::RuleCompilationError(rule.name, e));
                    }
                }
            }
            None => {
                warn!("Skipping rule '{}' because its pattern is missing.", &rule.name);
                continue;
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(MaskError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(CompiledRules { rules: compiled_rules })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles them if not found.
///
/// This is the public entry point for retrieving compiled rules. It returns an
/// `Arc` to a `CompiledRules` instance, allowing for cheap sharing.
pub fn get_or_compile_rules(config: &MaskConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_RULES_CACHE.read().unwrap();
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    } // Read lock is released here.

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = compile_rules(config.rules.clone())?;
    let compiled_arc = Arc::new(compiled);

    COMPILED_RULES_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_the_default_rule_set() {
        let config = MaskConfig::load_default_rules().unwrap();
        let compiled = compile_rules(config.rules).unwrap();
        assert_eq!(compiled.rules.len(), 4);
        assert!(matches!(compiled.rules[1].pass, CompiledPass::PathScanner));
    }

    #[test]
    fn unknown_scanner_is_a_compilation_error() {
        let rule = MaskRule {
            name: "registry".to_string(),
            pattern_type: "scanner".to_string(),
            ..Default::default()
        };
        let err = compile_rules(vec![rule]).unwrap_err();
        assert!(err.to_string().contains("registry"), "{err}");
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let rule = MaskRule {
            name: "huge".to_string(),
            pattern: Some("a".repeat(MAX_PATTERN_LENGTH + 1)),
            ..Default::default()
        };
        let err = compile_rules(vec![rule]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"), "{err}");
    }

    #[test]
    fn invalid_regex_is_reported_by_rule_name() {
        let rule = MaskRule {
            name: "broken".to_string(),
            pattern: Some("(unclosed".to_string()),
            ..Default::default()
        };
        let err = compile_rules(vec![rule]).unwrap_err();
        assert!(err.to_string().contains("broken"), "{err}");
    }

    #[test]
    fn cache_returns_the_same_compilation() {
        let config = MaskConfig::load_default_rules().unwrap();
        let first = get_or_compile_rules(&config).unwrap();
        let second = get_or_compile_rules(&config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
