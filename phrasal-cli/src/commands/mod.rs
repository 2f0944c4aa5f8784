//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use phrasal_core::{phrase_detection_config, DetectionMode, Language};

pub mod detect;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group the words of text files into phrases
    Detect(detect::DetectArgs),

    /// Check a custom lexicon file
    Validate(validate::ValidateArgs),

    /// Write a built-in lexicon as an editable template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with built-in lexicons
    Languages,

    /// List detection modes
    Modes,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for language in Language::ALL {
                    println!(
                        "  {:<10} {} ({})",
                        language.name().to_lowercase(),
                        language.name(),
                        language.code()
                    );
                }
            }
            ListCommands::Modes => {
                let catalog = phrase_detection_config();
                println!("Available modes:");
                for mode in &catalog.modes {
                    let marker = if mode.id == catalog.default_mode {
                        " (default)"
                    } else {
                        ""
                    };
                    println!(
                        "  {:<10} {}{marker}: {}",
                        mode.id.as_str(),
                        mode.name,
                        mode.description
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        println!("  {:<10} {help}", value.get_name());
                    }
                }
            }
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one phrase per line
    Text,
    /// JSON array of documents with phrase ranges
    Json,
    /// Markdown numbered list per document
    Markdown,
}

/// Languages selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    /// German rules, including separable prefixes
    German,
    /// English rules
    English,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::German => Language::German,
            LanguageArg::English => Language::English,
        }
    }
}

/// Detection modes selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One word at a time
    Single,
    /// Rule-based phrases
    Phrase,
    /// Phrases for long texts, single words for short ones
    Adaptive,
}

impl From<ModeArg> for DetectionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => DetectionMode::Single,
            ModeArg::Phrase => DetectionMode::Phrase,
            ModeArg::Adaptive => DetectionMode::Adaptive,
        }
    }
}
