//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use phrasal_core::{language::embedded_source, Language};
use std::path::PathBuf;

use super::LanguageArg;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Built-in lexicon to start from
    #[arg(short, long, value_enum, required = true)]
    pub language: LanguageArg,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let language = Language::from(self.language);

        println!("Generating lexicon template...");
        println!("  Language: {}", language.name());
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the word lists to suit your texts");
        println!("2. Validate your lexicon:");
        println!("   phrasal validate --lexicon {}", self.output.display());
        println!("3. Use it for detection:");
        println!(
            "   phrasal detect -i story.txt -l {} --lexicon {}",
            language.name().to_lowercase(),
            self.output.display()
        );

        Ok(())
    }

    /// Embedded lexicon for the language behind an explanatory header
    fn generate_template(&self) -> String {
        let language = Language::from(self.language);
        format!(
            "# Phrasal lexicon for {name}\n\
             #\n\
             # Category lists are matched case-insensitively after stripping\n\
             # punctuation. Missing categories are treated as empty.\n\
             \n\
             {source}",
            name = language.name(),
            source = embedded_source(language)
        )
    }
}
