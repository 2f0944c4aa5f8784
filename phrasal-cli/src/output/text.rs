//! Plain text output formatter

use super::{rule_label, OutputFormatter};
use anyhow::Result;
use phrasal_core::{DetectionMode, Phrase, RuleHit, Token};
use std::io::{self, Write};

/// Plain text formatter - outputs one phrase per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_headers: false,
            documents: 0,
        }
    }

    /// Print a `==> source <==` line before each document
    pub fn with_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, source: &str, _mode: DetectionMode) -> Result<()> {
        if self.show_headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        self.documents += 1;
        Ok(())
    }

    fn format_phrase(&mut self, phrase: &Phrase) -> Result<()> {
        writeln!(self.writer, "{}", phrase.text())?;
        Ok(())
    }

    fn format_rule_hit(&mut self, hit: &RuleHit, token: &Token) -> Result<()> {
        writeln!(
            self.writer,
            "  #{:<4} {:<16} {:<16} {}",
            hit.index,
            token.text,
            rule_label(hit),
            hit.transition
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrasal_core::{BoundaryRule, Transition};

    fn render(show_headers: bool, sources: &[&str]) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer).with_headers(show_headers);
            for source in sources {
                formatter
                    .begin_document(source, DetectionMode::Phrase)
                    .unwrap();
                let words = Token::sequence(["der", "Hund"]);
                formatter
                    .format_phrase(&Phrase::from_words(words).unwrap())
                    .unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_phrase_per_line() {
        assert_eq!(render(false, &["a.txt"]), "der Hund\n");
    }

    #[test]
    fn test_headers_between_documents() {
        assert_eq!(
            render(true, &["a.txt", "b.txt"]),
            "==> a.txt <==\nder Hund\n\n==> b.txt <==\nder Hund\n"
        );
    }

    #[test]
    fn test_rule_hit_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            let hit = RuleHit {
                index: 2,
                rule: Some(BoundaryRule::Conjunction),
                transition: Transition::Split,
            };
            formatter
                .format_rule_hit(&hit, &Token::new("und", 2))
                .unwrap();
        }
        let line = String::from_utf8(buffer).unwrap();
        assert!(line.contains("#2"));
        assert!(line.contains("und"));
        assert!(line.trim_end().ends_with("conjunction      split"));
    }
}
