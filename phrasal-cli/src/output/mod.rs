//! Output formatting module

use anyhow::Result;
use phrasal_core::{DetectionMode, Phrase, RuleHit, Token};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the output for one input document
    fn begin_document(&mut self, source: &str, mode: DetectionMode) -> Result<()>;

    /// Format and output a single phrase
    fn format_phrase(&mut self, phrase: &Phrase) -> Result<()>;

    /// Format one rule decision of the trace
    fn format_rule_hit(&mut self, hit: &RuleHit, token: &Token) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Rule name shown in traces, `-` when no rule matched
pub(crate) fn rule_label(hit: &RuleHit) -> &'static str {
    hit.rule.map(|rule| rule.name()).unwrap_or("-")
}
