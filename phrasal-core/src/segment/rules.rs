//! Boundary rules
//!
//! Each token after the first is checked against [`BoundaryRule::PRECEDENCE`].
//! The first rule whose guard matches decides the transition; when no rule
//! matches the token extends the phrase in progress.

use std::fmt;

use crate::api::{Language, PhraseLimits};
use crate::language::lexicon::{clean_word, is_punctuation_mark, LexicalCategory, Lexicon};
use crate::language::noun::looks_like_noun;
use crate::types::Token;

/// What happens to the phrase in progress at a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Append the token to the phrase in progress
    Extend,
    /// Emit the phrase in progress and start a new one at the token
    Split,
    /// Append the token, then emit the phrase
    Close,
}

/// A positional rule that can decide a phrase boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryRule {
    /// A lone punctuation mark ends the phrase it follows
    Punctuation,
    /// An article before a noun or adjective opens a noun phrase
    ArticleBeforeNoun,
    /// A preposition opens a prepositional phrase
    Preposition,
    /// A conjunction always opens a new phrase
    Conjunction,
    /// A modal or auxiliary verb opens a verb phrase
    ModalVerb,
    /// A verb stays with the separable prefix before it
    SeparablePrefix,
    /// Long phrases are cut
    LengthCap,
}

impl BoundaryRule {
    /// Evaluation order; the first matching rule wins
    pub const PRECEDENCE: [BoundaryRule; 7] = [
        BoundaryRule::Punctuation,
        BoundaryRule::ArticleBeforeNoun,
        BoundaryRule::Preposition,
        BoundaryRule::Conjunction,
        BoundaryRule::ModalVerb,
        BoundaryRule::SeparablePrefix,
        BoundaryRule::LengthCap,
    ];

    /// Short rule identifier
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryRule::Punctuation => "punctuation",
            BoundaryRule::ArticleBeforeNoun => "article",
            BoundaryRule::Preposition => "preposition",
            BoundaryRule::Conjunction => "conjunction",
            BoundaryRule::ModalVerb => "modal-verb",
            BoundaryRule::SeparablePrefix => "separable-prefix",
            BoundaryRule::LengthCap => "length-cap",
        }
    }

    /// `None` when the rule's guard does not match the token
    pub(crate) fn evaluate(self, ctx: &RuleContext<'_>) -> Option<Transition> {
        let split_if = |condition: bool| {
            if condition {
                Transition::Split
            } else {
                Transition::Extend
            }
        };

        match self {
            BoundaryRule::Punctuation => {
                is_punctuation_mark(&ctx.current.text).then_some(Transition::Close)
            }
            BoundaryRule::ArticleBeforeNoun => {
                if !ctx.current_is(LexicalCategory::Articles) {
                    return None;
                }
                let next = ctx.next?;
                let opens_noun_phrase = looks_like_noun(ctx.lexicon, &next.text, ctx.language)
                    || ctx.lexicon.contains(&next.text, LexicalCategory::Adjectives);
                opens_noun_phrase.then(|| split_if(ctx.buffered > ctx.limits.article_split_after))
            }
            BoundaryRule::Preposition => ctx
                .current_is(LexicalCategory::Prepositions)
                .then(|| split_if(ctx.buffered > ctx.limits.preposition_split_after)),
            BoundaryRule::Conjunction => ctx
                .current_is(LexicalCategory::Conjunctions)
                .then_some(Transition::Split),
            BoundaryRule::ModalVerb => ctx
                .current_is(LexicalCategory::ModalVerbs)
                .then(|| split_if(ctx.buffered > ctx.limits.modal_split_after)),
            BoundaryRule::SeparablePrefix => {
                let after_prefix = ctx.language.has_separable_prefixes()
                    && ctx.previous.is_some_and(|prev| {
                        ctx.lexicon
                            .contains(&prev.text, LexicalCategory::SeparablePrefixes)
                    });
                after_prefix.then_some(Transition::Extend)
            }
            BoundaryRule::LengthCap => {
                (ctx.buffered >= ctx.limits.max_phrase_words).then_some(Transition::Split)
            }
        }
    }
}

impl Transition {
    /// Lowercase transition name
    pub fn name(&self) -> &'static str {
        match self {
            Transition::Extend => "extend",
            Transition::Split => "split",
            Transition::Close => "close",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BoundaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decision recorded for one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// Index of the token the decision was made for
    pub index: usize,
    /// Rule that decided, `None` when no rule matched
    pub rule: Option<BoundaryRule>,
    /// What the decision did to the phrase in progress
    pub transition: Transition,
}

/// Everything a rule may look at for one token
pub(crate) struct RuleContext<'a> {
    pub current: &'a Token,
    pub current_clean: String,
    pub previous: Option<&'a Token>,
    pub next: Option<&'a Token>,
    /// Words already in the phrase in progress
    pub buffered: usize,
    pub language: Language,
    pub lexicon: &'a Lexicon,
    pub limits: &'a PhraseLimits,
}

impl RuleContext<'_> {
    fn current_is(&self, category: LexicalCategory) -> bool {
        self.lexicon.contains_clean(&self.current_clean, category)
    }
}

impl<'a> RuleContext<'a> {
    pub fn new(
        current: &'a Token,
        previous: Option<&'a Token>,
        next: Option<&'a Token>,
        buffered: usize,
        language: Language,
        lexicon: &'a Lexicon,
        limits: &'a PhraseLimits,
    ) -> Self {
        Self {
            current,
            current_clean: clean_word(&current.text),
            previous,
            next,
            buffered,
            language,
            lexicon,
            limits,
        }
    }
}

/// Run the precedence list for one token
pub(crate) fn decide(ctx: &RuleContext<'_>) -> (Option<BoundaryRule>, Transition) {
    BoundaryRule::PRECEDENCE
        .iter()
        .find_map(|&rule| rule.evaluate(ctx).map(|transition| (Some(rule), transition)))
        .unwrap_or((None, Transition::Extend))
}
