// spellmask-core/src/engines/pipeline_engine.rs
//! A `MaskingEngine` implementation that applies the configured passes as a
//! fixed sequential pipeline.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{MaskConfig, MaskRule, MaskSummaryItem};
use crate::engine::MaskingEngine;
use crate::mask_match::{log_mask_match_debug, MaskMatch};
use crate::maskers::blank_spans;
use crate::maskers::compiler::{get_or_compile_rules, CompiledRules};

/// Applies mask rules in configuration order, each rule over the previous
/// rule's output. Every rule preserves byte length, so the spans it reports
/// are valid offsets into the original input no matter which pipeline stage
/// found them.
#[derive(Debug)]
pub struct PipelineEngine {
    compiled_rules: Arc<CompiledRules>,
    config: MaskConfig,
}

impl PipelineEngine {
    pub fn new(config: MaskConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile mask rules for PipelineEngine")?;

        Ok(Self { compiled_rules, config })
    }

    /// Runs every enabled pass over `content` and collects the masked text
    /// plus one `MaskMatch` per blanked span, grouped in pass order.
    fn run_passes(&self, content: &str, source_id: &str) -> (String, Vec<Vec<MaskMatch>>) {
        let rules_map: HashMap<&str, &MaskRule> =
            self.config.rules.iter().map(|rule| (rule.name.as_str(), rule)).collect();

        let mut text = content.to_string();
        let mut per_rule: Vec<Vec<MaskMatch>> = Vec::with_capacity(self.compiled_rules.rules.len());

        for compiled_rule in &self.compiled_rules.rules {
            let mut matches = Vec::new();

            let enabled = rules_map
                .get(compiled_rule.name.as_str())
                .map_or(true, |rule| rule.enabled != Some(false));
            if enabled {
                let spans = compiled_rule.find_spans(&text);
                for span in &spans {
                    let original = &content[span.clone()];
                    log_mask_match_debug(module_path!(), &compiled_rule.name, original);
                    matches.push(MaskMatch {
                        rule_name: compiled_rule.name.clone(),
                        original_string: original.to_string(),
                        start: span.start as u64,
                        end: span.end as u64,
                        line_number: Some(line_number_at(content, span.start)),
                        source_id: source_id.to_string(),
                    });
                }
                text = blank_spans(&text, &spans);
                debug_assert_eq!(text.len(), content.len());
            }

            per_rule.push(matches);
        }

        (text, per_rule)
    }

    fn summarize(per_rule: Vec<Vec<MaskMatch>>) -> Vec<MaskSummaryItem> {
        per_rule
            .into_iter()
            .filter(|matches| !matches.is_empty())
            .map(|matches| MaskSummaryItem {
                rule_name: matches[0].rule_name.clone(),
                occurrences: matches.len(),
                original_texts: matches.into_iter().map(|m| m.original_string).collect(),
            })
            .collect()
    }
}

/// 1-based line number of the byte at `offset`.
fn line_number_at(content: &str, offset: usize) -> u64 {
    content.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

impl MaskingEngine for PipelineEngine {
    fn mask(&self, content: &str, source_id: &str) -> Result<(String, Vec<MaskSummaryItem>)> {
        let (masked, per_rule) = self.run_passes(content, source_id);
        Ok((masked, Self::summarize(per_rule)))
    }

    fn analyze(&self, content: &str, source_id: &str) -> Result<Vec<MaskSummaryItem>> {
        let (_, per_rule) = self.run_passes(content, source_id);
        Ok(Self::summarize(per_rule))
    }

    fn find_matches(&self, content: &str, source_id: &str) -> Result<Vec<MaskMatch>> {
        let (_, per_rule) = self.run_passes(content, source_id);
        let mut out: Vec<MaskMatch> = per_rule.into_iter().flatten().collect();
        out.sort_by_key(|m| m.start);
        Ok(out)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn rules(&self) -> &MaskConfig {
        &self.config
    }
}
