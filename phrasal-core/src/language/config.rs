//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon tables.

use serde::{Deserialize, Serialize};

use crate::language::lexicon::clean_word;

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub categories: Categories,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Word lists, one per lexical category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub articles: Vec<String>,
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub modal_verbs: Vec<String>,
    #[serde(default)]
    pub separable_prefixes: Vec<String>,
}

impl Categories {
    /// Iterate `(category name, words)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("articles", self.articles.as_slice()),
            ("prepositions", self.prepositions.as_slice()),
            ("conjunctions", self.conjunctions.as_slice()),
            ("adjectives", self.adjectives.as_slice()),
            ("modal_verbs", self.modal_verbs.as_slice()),
            ("separable_prefixes", self.separable_prefixes.as_slice()),
        ]
        .into_iter()
    }
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        for (category, words) in self.categories.iter() {
            if let Some(pos) = words.iter().position(|w| w.trim().is_empty()) {
                return Err(format!("{category}[{pos}] is an empty entry"));
            }

            // Lookups strip punctuation, so such an entry could never match
            if let Some((pos, word)) = words
                .iter()
                .enumerate()
                .find(|(_, w)| clean_word(w) != w.trim().to_lowercase())
            {
                return Err(format!(
                    "{category}[{pos}] \"{word}\" contains punctuation and can never match"
                ));
            }
        }

        Ok(())
    }
}
