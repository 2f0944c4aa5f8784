//! Configuration API for phrase detection

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{DetectionMode, Language};
use crate::error::Error;
use crate::language::Lexicon;

/// Default limit constants
pub mod defaults {
    /// Articles split a phrase only once it has more than this many words
    pub const ARTICLE_SPLIT_AFTER: usize = 1;

    /// Prepositions split a phrase only once it has more than this many words
    pub const PREPOSITION_SPLIT_AFTER: usize = 1;

    /// Modal verbs split a phrase only once it has more than this many words
    pub const MODAL_SPLIT_AFTER: usize = 2;

    /// A phrase with this many words is closed before the next one
    pub const MAX_PHRASE_WORDS: usize = 4;

    /// Single-word phrases merge back into predecessors shorter than this
    pub const MERGE_BELOW: usize = 3;

    /// Adaptive mode switches to phrases above this many tokens
    pub const ADAPTIVE_THRESHOLD: usize = 20;
}

/// Word-count thresholds used by the boundary rules and the merge pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseLimits {
    pub article_split_after: usize,
    pub preposition_split_after: usize,
    pub modal_split_after: usize,
    pub max_phrase_words: usize,
    pub merge_below: usize,
    pub adaptive_threshold: usize,
}

impl Default for PhraseLimits {
    fn default() -> Self {
        Self {
            article_split_after: defaults::ARTICLE_SPLIT_AFTER,
            preposition_split_after: defaults::PREPOSITION_SPLIT_AFTER,
            modal_split_after: defaults::MODAL_SPLIT_AFTER,
            max_phrase_words: defaults::MAX_PHRASE_WORDS,
            merge_below: defaults::MERGE_BELOW,
            adaptive_threshold: defaults::ADAPTIVE_THRESHOLD,
        }
    }
}

impl PhraseLimits {
    /// Validate the limits
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_phrase_words == 0 {
            return Err(Error::Configuration(
                "max_phrase_words must be greater than 0".into(),
            ));
        }

        if self.merge_below == 0 {
            return Err(Error::Configuration(
                "merge_below must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Detector configuration
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    pub(crate) language: Language,
    pub(crate) mode: DetectionMode,
    pub(crate) limits: PhraseLimits,
    pub(crate) lexicon: Option<Arc<Lexicon>>,
}

impl DetectorConfig {
    /// Create a configuration builder
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }

    /// Configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Configured default mode
    pub fn mode(&self) -> DetectionMode {
        self.mode
    }

    /// Configured limits
    pub fn limits(&self) -> &PhraseLimits {
        &self.limits
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        self.limits.validate()
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct DetectorConfigBuilder {
    language: Option<String>,
    mode: Option<String>,
    limits: Option<PhraseLimits>,
    max_phrase_words: Option<usize>,
    merge_below: Option<usize>,
    adaptive_threshold: Option<usize>,
    lexicon: Option<Arc<Lexicon>>,
}

impl DetectorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code or name
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the detection mode by name
    pub fn mode(mut self, name: impl Into<String>) -> Self {
        self.mode = Some(name.into());
        self
    }

    /// Replace all limits at once
    pub fn limits(mut self, limits: PhraseLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Set the phrase length cap
    pub fn max_phrase_words(mut self, words: usize) -> Self {
        self.max_phrase_words = Some(words);
        self
    }

    /// Set the merge threshold for single-word phrases
    pub fn merge_below(mut self, words: usize) -> Self {
        self.merge_below = Some(words);
        self
    }

    /// Set the token count above which adaptive mode groups phrases
    pub fn adaptive_threshold(mut self, tokens: usize) -> Self {
        self.adaptive_threshold = Some(tokens);
        self
    }

    /// Use a custom lexicon instead of the built-in tables
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(Arc::new(lexicon));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DetectorConfig, Error> {
        let mut config = DetectorConfig::default();

        if let Some(code) = self.language {
            config.language = Language::from_str(&code)?;
        }

        if let Some(name) = self.mode {
            config.mode = DetectionMode::from_str(&name)?;
        }

        if let Some(limits) = self.limits {
            config.limits = limits;
        }

        if let Some(words) = self.max_phrase_words {
            config.limits.max_phrase_words = words;
        }

        if let Some(words) = self.merge_below {
            config.limits.merge_below = words;
        }

        if let Some(tokens) = self.adaptive_threshold {
            config.limits.adaptive_threshold = tokens;
        }

        config.lexicon = self.lexicon;

        config.validate()?;
        Ok(config)
    }
}
