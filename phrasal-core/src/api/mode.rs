//! Detection modes and their metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Segmentation granularity requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// One phrase per word
    Single,
    /// Rule-based phrase grouping
    #[default]
    Phrase,
    /// `Phrase` for long inputs, `Single` otherwise
    Adaptive,
}

impl DetectionMode {
    /// All modes in presentation order
    pub const ALL: [DetectionMode; 3] = [
        DetectionMode::Single,
        DetectionMode::Phrase,
        DetectionMode::Adaptive,
    ];

    /// Parse a mode name, falling back to `Phrase` for anything unknown
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or(DetectionMode::Phrase)
    }

    fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "single" => Some(DetectionMode::Single),
            "phrase" => Some(DetectionMode::Phrase),
            "adaptive" => Some(DetectionMode::Adaptive),
            _ => None,
        }
    }

    /// Mode identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMode::Single => "single",
            DetectionMode::Phrase => "phrase",
            DetectionMode::Adaptive => "adaptive",
        }
    }

    /// Resolve `Adaptive` to a concrete mode for an input of `token_count`
    ///
    /// Inputs longer than `adaptive_threshold` tokens use `Phrase`.
    pub fn resolve(self, token_count: usize, adaptive_threshold: usize) -> DetectionMode {
        match self {
            DetectionMode::Adaptive if token_count > adaptive_threshold => DetectionMode::Phrase,
            DetectionMode::Adaptive => DetectionMode::Single,
            concrete => concrete,
        }
    }

    fn info(self) -> ModeInfo {
        let (name, description) = match self {
            DetectionMode::Single => ("Single Words", "Highlight one word at a time"),
            DetectionMode::Phrase => (
                "Phrases",
                "Highlight meaningful phrases (e.g., \"der große Hund\")",
            ),
            DetectionMode::Adaptive => (
                "Adaptive",
                "Use phrases for longer texts and single words for short ones",
            ),
        };
        ModeInfo {
            id: self,
            name,
            description,
        }
    }
}

impl FromStr for DetectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

impl fmt::Display for DetectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one mode for a settings screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeInfo {
    pub id: DetectionMode,
    pub name: &'static str,
    pub description: &'static str,
}

/// Available modes and the default selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeCatalog {
    pub modes: Vec<ModeInfo>,
    pub default_mode: DetectionMode,
}

/// Static metadata describing the available detection modes
pub fn phrase_detection_config() -> ModeCatalog {
    ModeCatalog {
        modes: DetectionMode::ALL.iter().map(|mode| mode.info()).collect(),
        default_mode: DetectionMode::default(),
    }
}
