//! Lexicon source selection for the CLI

use anyhow::Result;
use phrasal_core::{Language, Lexicon};
use std::path::PathBuf;

use crate::error::CliError;

/// Where the category tables for a run come from
#[derive(Debug, Clone)]
pub enum LexiconSource {
    /// Tables compiled into the library
    BuiltIn(Language),
    /// Custom TOML lexicon
    External {
        /// Path to the lexicon file
        path: PathBuf,
        /// Language whose positional rules apply
        language: Language,
    },
}

impl LexiconSource {
    /// Pick the source from the command line
    pub fn new(language: Language, lexicon: Option<PathBuf>) -> Self {
        match lexicon {
            Some(path) => LexiconSource::External { path, language },
            None => LexiconSource::BuiltIn(language),
        }
    }

    /// Language whose rules apply
    pub fn language(&self) -> Language {
        match self {
            LexiconSource::BuiltIn(language) | LexiconSource::External { language, .. } => {
                *language
            }
        }
    }

    /// Load the custom lexicon, `None` for built-in tables
    pub fn load(&self) -> Result<Option<Lexicon>> {
        match self {
            LexiconSource::BuiltIn(_) => Ok(None),
            LexiconSource::External { path, .. } => {
                let lexicon = Lexicon::from_file(path).map_err(CliError::from)?;
                log::info!(
                    "Loaded lexicon '{}' ({}) from {}",
                    lexicon.name(),
                    lexicon.code(),
                    path.display()
                );
                Ok(Some(lexicon))
            }
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn(language) => format!("Built-in: {}", language.name()),
            LexiconSource::External { path, language } => {
                format!("External: {} ({} rules)", path.display(), language.name())
            }
        }
    }
}
