//! Configuration module

use anyhow::Result;
use phrasal_core::{DetectionMode, Language, PhraseLimits};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Boundary rule thresholds
    #[serde(default)]
    pub limits: PhraseLimits,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.limits.validate().map_err(CliError::from)?;

        log::debug!("Loaded CLI configuration from {}", path.display());
        Ok(config)
    }

    /// Default language named in the file
    pub fn language(&self) -> Result<Language> {
        Ok(self
            .detection
            .default_language
            .parse::<Language>()
            .map_err(CliError::from)?)
    }

    /// Default mode named in the file
    pub fn mode(&self) -> Result<DetectionMode> {
        Ok(self
            .detection
            .default_mode
            .parse::<DetectionMode>()
            .map_err(CliError::from)?)
    }
}

/// Detection-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Default language for detection
    pub default_language: String,

    /// Default detection mode
    pub default_mode: String,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default().name().to_lowercase(),
            default_mode: DetectionMode::default().as_str().to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("phrasal.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.language().unwrap(), Language::German);
        assert_eq!(config.mode().unwrap(), DetectionMode::Phrase);
        assert_eq!(config.limits, PhraseLimits::default());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[detection]
default_language = "en"

[limits]
max_phrase_words = 6
"#,
        );

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.language().unwrap(), Language::English);
        assert_eq!(config.mode().unwrap(), DetectionMode::Phrase);
        assert_eq!(config.limits.max_phrase_words, 6);
        assert_eq!(config.limits.merge_below, 3);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[detection]\ndefault_language = \"klingon\"\n");

        let config = CliConfig::load(&path).unwrap();
        assert!(config.language().is_err());
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[limits]\nmerge_below = 0\n");

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[detection\n");

        assert!(CliConfig::load(&path).is_err());
    }
}
