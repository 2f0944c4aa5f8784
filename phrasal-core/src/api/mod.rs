//! Public API for phrase detection
//!
//! This module provides the detector, its configuration and the small set of
//! helpers a reading UI needs: rendering a phrase and finding the phrase that
//! holds the word currently being spoken.

mod config;
mod detector;
mod language;
mod mode;
mod render;


pub use config::{defaults, DetectorConfig, DetectorConfigBuilder, PhraseLimits};
pub use detector::{apply_phrase_detection, detect_phrases, PhraseDetector};
pub use language::Language;
pub use mode::{phrase_detection_config, DetectionMode, ModeCatalog, ModeInfo};
pub use render::{map_word_index_to_phrase_index, phrase_text};
