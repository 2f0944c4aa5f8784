//! Lexical category tables
//!
//! Closed word lists used as a heuristic aid for phrase boundaries. They are
//! intentionally small; a miss simply means a rule does not fire.

use std::collections::HashSet;
use std::fmt;

use crate::language::config::LexiconConfig;

/// Characters removed before a table lookup
const STRIPPED: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}',
];

/// Tokens that end a phrase on their own
const PUNCTUATION_MARKS: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Closed word class used by the boundary rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalCategory {
    /// Articles and determiners
    Articles,
    /// Prepositions, including contracted forms
    Prepositions,
    /// Coordinating and subordinating conjunctions
    Conjunctions,
    /// Common adjectives
    Adjectives,
    /// Modal and auxiliary verbs
    ModalVerbs,
    /// Separable verb prefixes (German only)
    SeparablePrefixes,
}

impl LexicalCategory {
    /// All categories in table order
    pub const ALL: [LexicalCategory; 6] = [
        LexicalCategory::Articles,
        LexicalCategory::Prepositions,
        LexicalCategory::Conjunctions,
        LexicalCategory::Adjectives,
        LexicalCategory::ModalVerbs,
        LexicalCategory::SeparablePrefixes,
    ];

    /// Parse a category name; unknown names yield `None`
    ///
    /// Accepts both the camelCase names used by callers (`modalVerbs`) and
    /// the snake_case keys of the TOML tables (`modal_verbs`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "articles" => Some(LexicalCategory::Articles),
            "prepositions" => Some(LexicalCategory::Prepositions),
            "conjunctions" => Some(LexicalCategory::Conjunctions),
            "adjectives" => Some(LexicalCategory::Adjectives),
            "modalVerbs" | "modal_verbs" => Some(LexicalCategory::ModalVerbs),
            "separablePrefixes" | "separable_prefixes" => Some(LexicalCategory::SeparablePrefixes),
            _ => None,
        }
    }

    /// Canonical category name
    pub fn name(&self) -> &'static str {
        match self {
            LexicalCategory::Articles => "articles",
            LexicalCategory::Prepositions => "prepositions",
            LexicalCategory::Conjunctions => "conjunctions",
            LexicalCategory::Adjectives => "adjectives",
            LexicalCategory::ModalVerbs => "modalVerbs",
            LexicalCategory::SeparablePrefixes => "separablePrefixes",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, punctuation-stripped form of a word used for lookups
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|ch| !STRIPPED.contains(ch))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Whether a token is exactly one phrase-ending punctuation mark
pub fn is_punctuation_mark(text: &str) -> bool {
    let mut chars = text.trim().chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(ch), None) if PUNCTUATION_MARKS.contains(&ch)
    )
}

/// Set of lowercase word-forms with a length prefilter
#[derive(Debug, Clone, Default)]
struct WordSet {
    words: HashSet<String>,
    min_length: usize,
    max_length: usize,
}

impl WordSet {
    fn from_words(words: &[String]) -> Self {
        let words: HashSet<String> = words.iter().map(|w| w.trim().to_lowercase()).collect();
        let min_length = words.iter().map(String::len).min().unwrap_or(0);
        let max_length = words.iter().map(String::len).max().unwrap_or(0);

        Self {
            words,
            min_length,
            max_length,
        }
    }

    fn contains(&self, cleaned: &str) -> bool {
        if cleaned.len() < self.min_length || cleaned.len() > self.max_length {
            return false;
        }
        self.words.contains(cleaned)
    }
}

/// Per-language lexical tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,
    sets: [WordSet; 6],
}

impl Lexicon {
    /// Build runtime tables from a parsed configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self, String> {
        config.validate()?;

        let categories = &config.categories;
        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            sets: [
                WordSet::from_words(&categories.articles),
                WordSet::from_words(&categories.prepositions),
                WordSet::from_words(&categories.conjunctions),
                WordSet::from_words(&categories.adjectives),
                WordSet::from_words(&categories.modal_verbs),
                WordSet::from_words(&categories.separable_prefixes),
            ],
        })
    }

    /// A lexicon with no entries; only punctuation and length rules apply
    pub fn empty(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            sets: Default::default(),
        }
    }

    /// Language code from the table metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language name from the table metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries in a category
    pub fn category_len(&self, category: LexicalCategory) -> usize {
        self.sets[category.slot()].words.len()
    }

    /// Whether the raw word belongs to the category
    pub fn contains(&self, word: &str, category: LexicalCategory) -> bool {
        self.contains_clean(&clean_word(word), category)
    }

    /// Lookup for a word already passed through [`clean_word`]
    pub fn contains_clean(&self, cleaned: &str, category: LexicalCategory) -> bool {
        !cleaned.is_empty() && self.sets[category.slot()].contains(cleaned)
    }

    /// Whether the raw word belongs to the category named `category`
    pub fn contains_named(&self, word: &str, category: &str) -> bool {
        LexicalCategory::from_name(category)
            .map(|category| self.contains(word, category))
            .unwrap_or(false)
    }
}
