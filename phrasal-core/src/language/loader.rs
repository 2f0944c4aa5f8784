//! Lexicon loader
//!
//! Manages the embedded lexicon tables and custom tables loaded from disk.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::api::Language;
use crate::error::{Error, Result};
use crate::language::{config::LexiconConfig, lexicon::Lexicon};

/// Embedded lexicon sources, keyed by language
const EMBEDDED_SOURCES: [(Language, &str); 2] = [
    (
        Language::German,
        include_str!("../../configs/lexicons/german.toml"),
    ),
    (
        Language::English,
        include_str!("../../configs/lexicons/english.toml"),
    ),
];

/// Embedded lexicons, parsed on first access
static EMBEDDED: OnceLock<HashMap<Language, Arc<Lexicon>>> = OnceLock::new();

/// Load the built-in lexicon for a language
pub fn get_lexicon(language: Language) -> Result<Arc<Lexicon>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (language, source) in EMBEDDED_SOURCES {
            match parse_lexicon(language.code(), source) {
                Ok(lexicon) => {
                    map.insert(language, Arc::new(lexicon));
                }
                Err(e) => {
                    log::warn!("Failed to load {} lexicon: {e}", language.name());
                }
            }
        }

        map
    });

    embedded
        .get(&language)
        .cloned()
        .ok_or_else(|| Error::lexicon(language.code(), "embedded lexicon unavailable"))
}

/// Built-in lexicon, or an empty one if the embedded table is unusable
pub(crate) fn lexicon_or_empty(language: Language) -> Arc<Lexicon> {
    get_lexicon(language).unwrap_or_else(|_| Arc::new(Lexicon::empty(language.code())))
}

/// Raw TOML source of the built-in lexicon
pub fn embedded_source(language: Language) -> &'static str {
    EMBEDDED_SOURCES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, source)| *source)
        .unwrap_or_default()
}

/// Parse a lexicon from a TOML string
pub fn parse_lexicon(source_name: &str, toml_str: &str) -> Result<Lexicon> {
    let config: LexiconConfig = toml::from_str(toml_str)
        .map_err(|e| Error::lexicon(source_name, format!("failed to parse: {e}")))?;

    Lexicon::from_config(&config).map_err(|message| Error::lexicon(source_name, message))
}

impl Lexicon {
    /// Load and validate a lexicon from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse_lexicon(&path.display().to_string(), &content)
    }
}
