//! Error types for phrasal-core
//!
//! Phrase detection itself never fails. Errors only surface at the
//! configuration edges: builders, strict parsers and lexicon loading.

use thiserror::Error;

/// Error type for configuration and lexicon operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language code or name
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Unknown detection mode name
    #[error("Invalid detection mode: {0}")]
    InvalidMode(String),

    /// Lexicon table could not be parsed or failed validation
    #[error("Lexicon error ({source_name}): {message}")]
    Lexicon {
        /// Where the lexicon came from (language code or file path)
        source_name: String,
        /// What went wrong
        message: String,
    },

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl Error {
    pub(crate) fn lexicon(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Lexicon {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

/// Result type for phrasal-core operations
pub type Result<T> = std::result::Result<T, Error>;
