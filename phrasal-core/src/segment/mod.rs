//! Phrase segmentation
//!
//! Raw boundary detection followed by the merge pass.

mod boundary;
mod merge;
pub mod rules;

pub use rules::{BoundaryRule, RuleHit, Transition};

use crate::api::{Language, PhraseLimits};
use crate::language::Lexicon;
use crate::types::{Phrase, Token};

/// Raw phrases, before single words are merged
pub(crate) fn detect_raw(
    tokens: &[Token],
    language: Language,
    lexicon: &Lexicon,
    limits: &PhraseLimits,
) -> Vec<Phrase> {
    boundary::segment(tokens, language, lexicon, limits, |_| {})
}

/// Raw phrases plus the decision taken at every token
pub(crate) fn detect_traced(
    tokens: &[Token],
    language: Language,
    lexicon: &Lexicon,
    limits: &PhraseLimits,
) -> (Vec<Phrase>, Vec<RuleHit>) {
    let mut hits = Vec::with_capacity(tokens.len().saturating_sub(1));
    let phrases = boundary::segment(tokens, language, lexicon, limits, |hit| hits.push(hit));
    (phrases, hits)
}

/// Boundary detection and merge pass
pub(crate) fn detect_merged(
    tokens: &[Token],
    language: Language,
    lexicon: &Lexicon,
    limits: &PhraseLimits,
) -> Vec<Phrase> {
    let raw = detect_raw(tokens, language, lexicon, limits);
    merge::merge_short_phrases(raw, limits.merge_below)
}

/// One phrase per token
pub(crate) fn single_words(tokens: &[Token]) -> Vec<Phrase> {
    tokens.iter().cloned().map(Phrase::single).collect()
}
