//! Language-specific lexical data
//!
//! Closed word tables per language, loaded from embedded TOML, plus the
//! lookups built on them.

pub mod config;
pub mod lexicon;
pub mod loader;
pub mod noun;

pub use config::LexiconConfig;
pub use lexicon::{clean_word, is_punctuation_mark, LexicalCategory, Lexicon};
pub use loader::{embedded_source, get_lexicon, parse_lexicon};

use crate::api::Language;

/// Whether the cleaned `word` is in the named category of the language's
/// built-in tables
///
/// Unknown category names are simply not a match.
pub fn is_in_category(word: &str, category: &str, language: Language) -> bool {
    loader::lexicon_or_empty(language).contains_named(word, category)
}

/// Whether `word` is plausibly a noun in `language`
pub fn is_likely_noun(word: &str, language: Language) -> bool {
    noun::looks_like_noun(&loader::lexicon_or_empty(language), word, language)
}
