//! Phrase boundary detection
//!
//! A single left-to-right pass over the tokens. The state is the phrase in
//! progress plus the phrases emitted so far; every token after the first is
//! routed through [`decide`] and the resulting [`Transition`] is applied.

use smallvec::SmallVec;

use crate::api::{Language, PhraseLimits};
use crate::language::Lexicon;
use crate::segment::rules::{decide, RuleContext, RuleHit, Transition};
use crate::types::{Phrase, Token};

/// Inline capacity of the phrase buffer; phrases rarely exceed the length cap
const INLINE_WORDS: usize = 8;

struct SegmenterState {
    buffer: SmallVec<[Token; INLINE_WORDS]>,
    phrases: Vec<Phrase>,
}

impl SegmenterState {
    fn new(capacity: usize) -> Self {
        Self {
            buffer: SmallVec::new(),
            phrases: Vec::with_capacity(capacity),
        }
    }

    fn apply(&mut self, transition: Transition, token: &Token) {
        match transition {
            Transition::Extend => self.buffer.push(token.clone()),
            Transition::Split => {
                self.flush();
                self.buffer.push(token.clone());
            }
            Transition::Close => {
                self.buffer.push(token.clone());
                self.flush();
            }
        }
    }

    /// Emit the phrase in progress; an empty buffer emits nothing
    fn flush(&mut self) {
        if let Some(phrase) = Phrase::from_words(self.buffer.drain(..).collect()) {
            self.phrases.push(phrase);
        }
    }

    fn finish(mut self) -> Vec<Phrase> {
        self.flush();
        self.phrases
    }
}

/// Split tokens into raw phrases, reporting every rule decision to `observe`
pub(crate) fn segment<F>(
    tokens: &[Token],
    language: Language,
    lexicon: &Lexicon,
    limits: &PhraseLimits,
    mut observe: F,
) -> Vec<Phrase>
where
    F: FnMut(RuleHit),
{
    let Some(first) = tokens.first() else {
        return Vec::new();
    };

    let mut state = SegmenterState::new(tokens.len() / 2 + 1);
    state.buffer.push(first.clone());

    for (pos, current) in tokens.iter().enumerate().skip(1) {
        let ctx = RuleContext::new(
            current,
            tokens.get(pos - 1),
            tokens.get(pos + 1),
            state.buffer.len(),
            language,
            lexicon,
            limits,
        );
        let (rule, transition) = decide(&ctx);

        log::trace!(
            "token {} {:?}: {:?} by {}",
            current.index,
            current.text,
            transition,
            rule.map_or("default", |r| r.name())
        );
        observe(RuleHit {
            index: current.index,
            rule,
            transition,
        });

        state.apply(transition, current);
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_lexicon;
    use crate::segment::rules::BoundaryRule;

    fn raw(words: &[&str], language: Language) -> Vec<Vec<String>> {
        let tokens = Token::sequence(words.iter().copied());
        let lexicon = get_lexicon(language).unwrap();
        segment(&tokens, language, &lexicon, &PhraseLimits::default(), |_| {})
            .into_iter()
            .map(|p| p.words.into_iter().map(|t| t.text).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(raw(&[], Language::German).is_empty());
    }

    #[test]
    fn test_single_token() {
        assert_eq!(raw(&["Hallo"], Language::German), vec![vec!["Hallo"]]);
    }

    #[test]
    fn test_conjunction_starts_new_phrase() {
        assert_eq!(
            raw(&["Ich", "gehe", "und", "ich", "komme"], Language::German),
            vec![vec!["Ich", "gehe"], vec!["und", "ich", "komme"]]
        );
    }

    #[test]
    fn test_punctuation_closes_without_trailing_empty_phrase() {
        assert_eq!(
            raw(&["Hallo", ",", "Welt", "."], Language::German),
            vec![vec!["Hallo", ","], vec!["Welt", "."]]
        );
    }

    #[test]
    fn test_conjunction_after_punctuation_does_not_emit_empty_phrase() {
        assert_eq!(
            raw(&["Ja", ",", "und", "dann"], Language::German),
            vec![vec!["Ja", ","], vec!["und", "dann"]]
        );
    }

    #[test]
    fn test_length_cap_splits_at_four_words() {
        assert_eq!(
            raw(
                &["eins", "zwei", "drei", "vier", "fünf", "sechs"],
                Language::German
            ),
            vec![vec!["eins", "zwei", "drei", "vier"], vec!["fünf", "sechs"]]
        );
    }

    #[test]
    fn test_separable_prefix_keeps_verb_attached() {
        // "kommen" would otherwise be cut off by the length cap
        assert_eq!(
            raw(
                &["heute", "nicht", "mehr", "zurück", "kommen", "lassen"],
                Language::German
            ),
            vec![
                vec!["heute", "nicht", "mehr", "zurück", "kommen"],
                vec!["lassen"]
            ]
        );
    }

    #[test]
    fn test_article_and_preposition_open_phrases() {
        assert_eq!(
            raw(
                &["Ich", "sehe", "den", "großen", "Hund", "im", "Park"],
                Language::German
            ),
            vec![
                vec!["Ich", "sehe"],
                vec!["den", "großen", "Hund"],
                vec!["im", "Park"]
            ]
        );
    }

    #[test]
    fn test_observer_sees_every_token_after_the_first() {
        let tokens = Token::sequence(["The", "cat", "and", "the", "dog"]);
        let lexicon = get_lexicon(Language::English).unwrap();
        let mut hits = Vec::new();
        segment(
            &tokens,
            Language::English,
            &lexicon,
            &PhraseLimits::default(),
            |hit| hits.push(hit),
        );

        assert_eq!(hits.len(), 4);
        assert_eq!(hits[0].index, 1);
        assert_eq!(hits[1].rule, Some(BoundaryRule::Conjunction));
        assert_eq!(hits[1].transition, Transition::Split);
    }
}
