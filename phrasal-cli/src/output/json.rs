//! JSON output formatter

use super::{rule_label, OutputFormatter};
use anyhow::{Context, Result};
use phrasal_core::{DetectionMode, Phrase, RuleHit, Token};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Phrases detected in one input
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file name
    pub source: String,
    /// Requested detection mode
    pub mode: DetectionMode,
    pub phrases: Vec<PhraseData>,
    /// Rule decisions, present with `--explain`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceData>,
}

/// Data structure for one phrase
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseData {
    /// Phrase text, words joined by single spaces
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
    pub word_count: usize,
}

/// Data structure for one rule decision
#[derive(Debug, Serialize, Deserialize)]
pub struct TraceData {
    pub index: usize,
    pub word: String,
    pub rule: String,
    pub transition: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    fn current(&mut self) -> Result<&mut DocumentData> {
        self.documents
            .last_mut()
            .context("phrase written before any document was started")
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &str, mode: DetectionMode) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            mode,
            phrases: Vec::new(),
            trace: Vec::new(),
        });
        Ok(())
    }

    fn format_phrase(&mut self, phrase: &Phrase) -> Result<()> {
        let data = PhraseData {
            text: phrase.text(),
            start_index: phrase.start_index,
            end_index: phrase.end_index,
            word_count: phrase.len(),
        };
        self.current()?.phrases.push(data);
        Ok(())
    }

    fn format_rule_hit(&mut self, hit: &RuleHit, token: &Token) -> Result<()> {
        let data = TraceData {
            index: hit.index,
            word: token.text.clone(),
            rule: rule_label(hit).to_string(),
            transition: hit.transition.to_string(),
        };
        self.current()?.trace.push(data);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrasal_core::Transition;

    #[test]
    fn test_documents_serialize_with_camel_case_phrases() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .begin_document("hund.txt", DetectionMode::Adaptive)
                .unwrap();
            let phrase = Phrase::from_words(vec![Token::new("der", 4), Token::new("Hund", 5)]);
            formatter.format_phrase(&phrase.unwrap()).unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let document = &value[0];
        assert_eq!(document["source"], "hund.txt");
        assert_eq!(document["mode"], "adaptive");
        assert_eq!(document["phrases"][0]["text"], "der Hund");
        assert_eq!(document["phrases"][0]["startIndex"], 4);
        assert_eq!(document["phrases"][0]["endIndex"], 5);
        assert_eq!(document["phrases"][0]["wordCount"], 2);
        assert!(document.get("trace").is_none());
    }

    #[test]
    fn test_trace_entries() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter
                .begin_document("a.txt", DetectionMode::Phrase)
                .unwrap();
            let hit = RuleHit {
                index: 1,
                rule: None,
                transition: Transition::Extend,
            };
            formatter
                .format_rule_hit(&hit, &Token::new("Hund", 1))
                .unwrap();
            formatter.finish().unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let trace = &value[0]["trace"][0];
        assert_eq!(trace["word"], "Hund");
        assert_eq!(trace["rule"], "-");
        assert_eq!(trace["transition"], "extend");
    }

    #[test]
    fn test_phrase_without_document_is_an_error() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        let phrase = Phrase::single(Token::new("allein", 0));
        assert!(formatter.format_phrase(&phrase).is_err());
    }
}
