//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// CLI configuration file could not be used
    ConfigError(String),
    /// Custom lexicon failed to load or validate
    LexiconError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::LexiconError(msg) => write!(f, "Lexicon error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<phrasal_core::Error> for CliError {
    fn from(err: phrasal_core::Error) -> Self {
        match err {
            phrasal_core::Error::Lexicon {
                source_name,
                message,
            } => CliError::LexiconError(format!("{source_name}: {message}")),
            phrasal_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
