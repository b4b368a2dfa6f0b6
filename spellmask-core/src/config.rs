//! Configuration management for `spellmask-core`.
//!
//! This module defines the core data structures for mask rules. It handles
//! serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating them. Rule order is
//! semantics here: rules apply in the order they are listed, each over the
//! previous rule's output, so the defaults list the most structurally
//! specific pass first.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Represents a single masking pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskRule {
    /// Unique identifier for the rule (e.g., "email").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The type of pass: "regex" or "scanner".
    pub pattern_type: String,
    /// The regex pattern string. If it contains a capture group 1, the
    /// masked span is that group rather than the whole match. Scanner rules
    /// carry no pattern.
    pub pattern: Option<String>,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// If true, the rule is disabled unless explicitly enabled.
    pub opt_in: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for MaskRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern_type: "regex".to_string(),
            pattern: None,
            multiline: false,
            dot_matches_new_line: false,
            opt_in: false,
            enabled: None,
        }
    }
}

/// Represents the top-level configuration structure for SpellMask.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct MaskConfig {
    /// Mask rules in application order.
    pub rules: Vec<MaskRule>,
}

/// Represents a single item in the masking summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
}

impl MaskConfig {
    /// Loads mask rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MaskConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default mask rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: MaskConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on caller-provided enable/disable lists.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            !disable_set.contains(rule_name_str)
                && (!rule.opt_in || enable_set.contains(rule_name_str))
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules with the defaults.
///
/// Unlike an unordered map merge, this keeps the default application order: a
/// user rule with a known name replaces the default in place, and unknown
/// user rules are appended after the defaults.
pub fn merge_rules(default_config: MaskConfig, user_config: Option<MaskConfig>) -> MaskConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut rules = default_config.rules;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            match rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(slot) => *slot = user_rule,
                None => rules.push(user_rule),
            }
        }
    }

    debug!("Final total rules after merge: {}", rules.len());
    MaskConfig { rules }
}

/// Validates rule integrity (names, pattern presence, regex compilation).
fn validate_rules(rules: &[MaskRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        match rule.pattern_type.as_str() {
            "scanner" => {
                if rule.pattern.is_some() {
                    errors.push(format!(
                        "Scanner rule '{}' must not carry a `pattern` field.",
                        rule.name
                    ));
                }
            }
            "regex" => {
                let pattern = match &rule.pattern {
                    Some(p) => p,
                    None => {
                        errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                        continue;
                    }
                };

                if pattern.is_empty() {
                    errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
                }

                if pattern.len() > MAX_PATTERN_LENGTH {
                    errors.push(format!(
                        "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                        rule.name,
                        pattern.len(),
                        MAX_PATTERN_LENGTH
                    ));
                }

                if let Err(e) = Regex::new(pattern) {
                    errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                }
            }
            other => {
                errors.push(format!(
                    "Rule '{}' has unknown `pattern_type` '{}'.",
                    rule.name, other
                ));
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
