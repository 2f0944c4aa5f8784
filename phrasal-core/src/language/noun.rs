//! Noun-likelihood heuristic
//!
//! German marks nouns by capitalization; English falls back to "long enough
//! and not a function word". Both are guesses, not grammar.

use crate::api::Language;
use crate::language::lexicon::{clean_word, LexicalCategory, Lexicon};

const GERMAN_NON_NOUNS: [LexicalCategory; 3] = [
    LexicalCategory::Articles,
    LexicalCategory::Prepositions,
    LexicalCategory::Conjunctions,
];

const ENGLISH_NON_NOUNS: [LexicalCategory; 4] = [
    LexicalCategory::Articles,
    LexicalCategory::Prepositions,
    LexicalCategory::Conjunctions,
    LexicalCategory::ModalVerbs,
];

/// Minimum cleaned length (exclusive) for an English noun candidate
const ENGLISH_MIN_NOUN_CHARS: usize = 2;

/// Estimate whether `word` is plausibly a noun
pub fn looks_like_noun(lexicon: &Lexicon, word: &str, language: Language) -> bool {
    let cleaned = clean_word(word);

    if language.capitalizes_nouns() {
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        capitalized
            && !GERMAN_NON_NOUNS
                .iter()
                .any(|&category| lexicon.contains_clean(&cleaned, category))
    } else {
        cleaned.chars().count() > ENGLISH_MIN_NOUN_CHARS
            && !ENGLISH_NON_NOUNS
                .iter()
                .any(|&category| lexicon.contains_clean(&cleaned, category))
    }
}
