//! Validate command implementation

use anyhow::Result;
use clap::Args;
use phrasal_core::{LexicalCategory, Lexicon};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Language code: {}", lexicon.code());
                println!("  Language name: {}", lexicon.name());
                for category in LexicalCategory::ALL {
                    println!(
                        "  {:<18} {} words",
                        category.name(),
                        lexicon.category_len(category)
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(CliError::from(e).into())
            }
        }
    }
}
