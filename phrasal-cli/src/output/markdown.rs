//! Markdown output formatter

use super::{rule_label, OutputFormatter};
use anyhow::Result;
use phrasal_core::{DetectionMode, Phrase, RuleHit, Token};
use std::io::Write;

/// Markdown formatter - outputs phrases as a numbered list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    phrase_count: usize,
    total_phrases: usize,
    trace_started: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            phrase_count: 0,
            total_phrases: 0,
            trace_started: false,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, source: &str, mode: DetectionMode) -> Result<()> {
        if self.total_phrases > 0 || self.trace_started {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {source} ({mode})")?;
        writeln!(self.writer)?;
        self.phrase_count = 0;
        self.trace_started = false;
        Ok(())
    }

    fn format_phrase(&mut self, phrase: &Phrase) -> Result<()> {
        self.phrase_count += 1;
        self.total_phrases += 1;
        writeln!(self.writer, "{}. {}", self.phrase_count, phrase.text())?;
        Ok(())
    }

    fn format_rule_hit(&mut self, hit: &RuleHit, token: &Token) -> Result<()> {
        if !self.trace_started {
            writeln!(self.writer)?;
            writeln!(self.writer, "| # | Word | Rule | Transition |")?;
            writeln!(self.writer, "|---|------|------|------------|")?;
            self.trace_started = true;
        }
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            hit.index,
            token.text.replace('|', "\\|"),
            rule_label(hit),
            hit.transition
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total phrases: {}*", self.total_phrases)?;
        self.writer.flush()?;
        Ok(())
    }
}
