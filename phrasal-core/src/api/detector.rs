//! Main phrase detector implementation

use std::sync::Arc;

use crate::api::{DetectionMode, DetectorConfig, Language};
use crate::error::Error;
use crate::language::{loader, Lexicon};
use crate::segment::{self, RuleHit};
use crate::types::{Phrase, Token};

/// Configured phrase detector
///
/// Holds no per-call state; one detector can serve any number of threads.
#[derive(Debug, Clone)]
pub struct PhraseDetector {
    lexicon: Arc<Lexicon>,
    config: DetectorConfig,
}

impl PhraseDetector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self::builtin(Language::default())
    }

    /// Create a detector with custom configuration
    pub fn with_config(config: DetectorConfig) -> Result<Self, Error> {
        config.validate()?;

        let lexicon = match &config.lexicon {
            Some(lexicon) => Arc::clone(lexicon),
            None => loader::get_lexicon(config.language)?,
        };

        Ok(Self { lexicon, config })
    }

    /// Create a detector for a specific language
    pub fn for_language(code: impl Into<String>) -> Result<Self, Error> {
        let config = DetectorConfig::builder().language(code).build()?;
        Self::with_config(config)
    }

    /// Detector on the built-in tables that never fails to construct
    ///
    /// An unusable embedded table degrades to an empty lexicon.
    pub(crate) fn builtin(language: Language) -> Self {
        Self {
            lexicon: loader::lexicon_or_empty(language),
            config: DetectorConfig {
                language,
                ..DetectorConfig::default()
            },
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Lexical tables in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Segment tokens using the configured mode
    pub fn detect(&self, tokens: &[Token]) -> Vec<Phrase> {
        self.detect_with_mode(tokens, self.config.mode)
    }

    /// Segment tokens using an explicit mode
    pub fn detect_with_mode(&self, tokens: &[Token], mode: DetectionMode) -> Vec<Phrase> {
        if tokens.is_empty() {
            return Vec::new();
        }

        let resolved = mode.resolve(tokens.len(), self.config.limits.adaptive_threshold);
        let phrases = match resolved {
            DetectionMode::Single => segment::single_words(tokens),
            _ => self.detect_phrases(tokens),
        };

        log::debug!(
            "{} tokens -> {} phrases ({} mode, resolved {}, {})",
            tokens.len(),
            phrases.len(),
            mode,
            resolved,
            self.config.language
        );

        phrases
    }

    /// Rule-based phrases with single words merged back
    pub fn detect_phrases(&self, tokens: &[Token]) -> Vec<Phrase> {
        segment::detect_merged(
            tokens,
            self.config.language,
            &self.lexicon,
            &self.config.limits,
        )
    }

    /// Rule-based phrases without the merge pass
    pub fn segment_raw(&self, tokens: &[Token]) -> Vec<Phrase> {
        segment::detect_raw(
            tokens,
            self.config.language,
            &self.lexicon,
            &self.config.limits,
        )
    }

    /// The rule decision taken at every token after the first
    pub fn explain(&self, tokens: &[Token]) -> Vec<RuleHit> {
        let (_, hits) = segment::detect_traced(
            tokens,
            self.config.language,
            &self.lexicon,
            &self.config.limits,
        );
        hits
    }
}

impl Default for PhraseDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule-based phrases for `tokens` using the built-in tables
pub fn detect_phrases(tokens: &[Token], language: Language) -> Vec<Phrase> {
    PhraseDetector::builtin(language).detect_phrases(tokens)
}

/// Mode-aware phrase detection using the built-in tables
pub fn apply_phrase_detection(
    tokens: &[Token],
    mode: DetectionMode,
    language: Language,
) -> Vec<Phrase> {
    PhraseDetector::builtin(language).detect_with_mode(tokens, mode)
}
