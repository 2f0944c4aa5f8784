//! Phrase rendering and word-to-phrase lookup for playback highlighting

use crate::types::Phrase;

/// Words per phrase assumed by the fallback estimate
const FALLBACK_WORDS_PER_PHRASE: usize = 3;

/// Text of a phrase, words joined by single spaces
///
/// An absent phrase renders as the empty string.
pub fn phrase_text(phrase: Option<&Phrase>) -> String {
    phrase.map(Phrase::text).unwrap_or_default()
}

/// Position of the phrase containing the word at `word_index`
///
/// Falls back to an estimate of three words per phrase, clamped to the last
/// phrase, when no range contains the index. Returns 0 for an empty list.
pub fn map_word_index_to_phrase_index(word_index: usize, phrases: &[Phrase]) -> usize {
    phrases
        .iter()
        .position(|phrase| phrase.contains_index(word_index))
        .unwrap_or_else(|| {
            (word_index / FALLBACK_WORDS_PER_PHRASE).min(phrases.len().saturating_sub(1))
        })
}
