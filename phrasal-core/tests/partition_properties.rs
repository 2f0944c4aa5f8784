//! Property tests for the partition and mapping invariants

use phrasal_core::{
    apply_phrase_detection, map_word_index_to_phrase_index, DetectionMode, Language, Phrase,
    PhraseDetector, Token,
};
use proptest::prelude::*;

/// Words chosen to hit every rule: function words, nouns, prefixes, marks
const VOCABULARY: &[&str] = &[
    "der", "die", "Hund", "Katze", "große", "in", "mit", "und", "aber", "kann", "muss", "an",
    "zurück", "kommt", "geht", "schnell", ",", ".", "!", "the", "a", "dog", "to", "and",
    "should", "old", "house", "Wort.", "\"Haus\"", "",
];

fn token_texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(VOCABULARY).prop_map(str::to_string),
        0..60,
    )
}

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn mode() -> impl Strategy<Value = DetectionMode> {
    prop::sample::select(DetectionMode::ALL.to_vec())
}

fn flatten(phrases: &[Phrase]) -> Vec<Token> {
    phrases.iter().flat_map(|p| p.words.iter().cloned()).collect()
}

proptest! {
    #[test]
    fn phrases_partition_the_input(texts in token_texts(), language in language(), mode in mode()) {
        let tokens = Token::sequence(texts);
        let phrases = apply_phrase_detection(&tokens, mode, language);

        prop_assert_eq!(flatten(&phrases), tokens);
    }

    #[test]
    fn phrases_are_non_empty_with_consistent_ranges(texts in token_texts(), language in language()) {
        let tokens = Token::sequence(texts);
        let phrases = apply_phrase_detection(&tokens, DetectionMode::Phrase, language);

        for phrase in &phrases {
            prop_assert!(!phrase.is_empty());
            prop_assert_eq!(phrase.start_index, phrase.words[0].index);
            prop_assert_eq!(phrase.end_index, phrase.words[phrase.len() - 1].index);
        }
        for pair in phrases.windows(2) {
            prop_assert_eq!(pair[0].end_index + 1, pair[1].start_index);
        }
    }

    #[test]
    fn raw_phrases_also_partition(texts in token_texts(), language in language()) {
        let tokens = Token::sequence(texts);
        let detector = PhraseDetector::for_language(language.code()).unwrap();

        prop_assert_eq!(flatten(&detector.segment_raw(&tokens)), tokens.clone());
        prop_assert_eq!(detector.explain(&tokens).len(), tokens.len().saturating_sub(1));
    }

    #[test]
    fn single_mode_yields_one_word_phrases(texts in token_texts(), language in language()) {
        let tokens = Token::sequence(texts);
        let phrases = apply_phrase_detection(&tokens, DetectionMode::Single, language);

        prop_assert_eq!(phrases.len(), tokens.len());
        prop_assert!(phrases.iter().all(|p| p.len() == 1));
    }

    #[test]
    fn every_index_maps_to_its_phrase(texts in token_texts(), language in language(), mode in mode()) {
        let tokens = Token::sequence(texts);
        let phrases = apply_phrase_detection(&tokens, mode, language);

        for token in &tokens {
            let position = map_word_index_to_phrase_index(token.index, &phrases);
            prop_assert!(phrases[position].contains_index(token.index));
        }
    }

    #[test]
    fn rendering_single_words_adds_no_whitespace(text in "[A-Za-zäöüß]{1,12}") {
        let phrase = Phrase::single(Token::new(text.clone(), 0));
        prop_assert_eq!(phrase.text(), text);
    }
}
