//! Language type for the API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Languages with built-in lexical tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German, including separable-prefix continuation
    #[default]
    German,
    /// English
    English,
}

impl Language {
    /// All built-in languages
    pub const ALL: [Language; 2] = [Language::German, Language::English];

    /// Create a Language from a language code
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    fn parse(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "de" | "deu" | "ger" | "german" | "deutsch" => Some(Language::German),
            "en" | "eng" | "english" => Some(Language::English),
            _ => None,
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::German => "German",
            Language::English => "English",
        }
    }

    /// Whether separable verb prefixes stay attached to the following verb
    pub fn has_separable_prefixes(&self) -> bool {
        matches!(self, Language::German)
    }

    /// Whether nouns are marked by capitalization
    pub fn capitalizes_nouns(&self) -> bool {
        matches!(self, Language::German)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
