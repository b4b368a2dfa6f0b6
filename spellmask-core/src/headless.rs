// spellmask-core/src/headless.rs
// File: spellmask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core engine in headless mode (non-UI).
//! Provides a helper for a full, one-shot masking of strings.

use anyhow::Result;

use crate::config::MaskConfig;
use crate::engine::MaskingEngine;
use crate::engines::pipeline_engine::PipelineEngine;

/// Fully masks an input string by applying every enabled rule in order.
/// This function is the primary entry point for non-interactive use with a
/// custom configuration; callers that want the built-in behavior can use
/// `mask_not_words` directly.
///
/// # Arguments
///
/// * `config` - The merged MaskConfig (defaults + optional user overrides).
/// * `content` - The string to be masked.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn headless_mask_string(config: MaskConfig, content: &str, source_id: &str) -> Result<String> {
    let engine = PipelineEngine::new(config)?;
    let (masked_content, _) = engine.mask(content, source_id)?;
    Ok(masked_content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn masks_with_default_rules() -> Result<()> {
        let content = "see /foo/bar.go and mail nickg+junk@xfoobar.com now";
        let config = MaskConfig::load_default_rules()?;

        let masked = headless_mask_string(config, content, "test_input")?;

        assert_eq!(masked.len(), content.len());
        assert!(!masked.contains("/foo/bar.go"));
        assert!(!masked.contains('@'));
        Ok(())
    }

    #[test]
    fn masks_with_a_single_custom_rule() -> Result<()> {
        use crate::config::MaskRule;

        let content = "ticket ABC-123 is open";
        let config = MaskConfig {
            rules: vec![MaskRule {
                name: "ticket".to_string(),
                pattern: Some(r"[A-Z]+-[0-9]+".to_string()),
                ..Default::default()
            }],
        };

        let masked = headless_mask_string(config, content, "test_input")?;
        assert_eq!(masked, "ticket         is open");
        Ok(())
    }
}
