//! Rule-based phrase detection for read-aloud highlighting
//!
//! This crate groups a sequence of word tokens (German or English) into short,
//! linguistically meaningful phrases so that a reading UI can highlight a
//! phrase at a time while audio plays. Grouping is driven by closed word
//! tables (articles, prepositions, conjunctions, adjectives, modal verbs and
//! German separable prefixes) and a handful of positional rules; there is no
//! statistical model.
//!
//! # Architecture
//!
//! - **Language layer**: embedded TOML lexicons and the lookups built on them
//! - **Segment layer**: the boundary rule state machine and the merge pass
//! - **API layer**: detector, configuration, modes and rendering helpers
//!
//! # Example
//!
//! ```rust
//! use phrasal_core::{apply_phrase_detection, DetectionMode, Language, Token};
//!
//! let tokens = Token::sequence(["Ich", "gehe", "und", "ich", "komme"]);
//! let phrases = apply_phrase_detection(&tokens, DetectionMode::Phrase, Language::German);
//!
//! assert_eq!(phrases.len(), 2);
//! assert_eq!(phrases[1].text(), "und ich komme");
//! ```

pub mod api;
pub mod error;
pub mod language;
pub mod segment;
pub mod types;

pub use api::{
    apply_phrase_detection, detect_phrases, map_word_index_to_phrase_index,
    phrase_detection_config, phrase_text, DetectionMode, DetectorConfig, DetectorConfigBuilder,
    Language, ModeCatalog, ModeInfo, PhraseDetector, PhraseLimits,
};
pub use error::{Error, Result};
pub use language::{is_in_category, is_likely_noun, LexicalCategory, Lexicon};
pub use segment::{BoundaryRule, RuleHit, Transition};
pub use types::{Phrase, Token};
