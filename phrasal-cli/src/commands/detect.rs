//! Detect command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use phrasal_core::{
    DetectionMode, DetectorConfig, Language, Phrase, PhraseDetector, PhraseLimits, RuleHit, Token,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{LanguageArg, ModeArg, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, tokenize, FileReader};
use crate::lexicon_source::LexiconSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language whose rules apply [default: german]
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Detection mode [default: phrase]
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Custom lexicon file replacing the built-in word tables
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Show which rule decided each word
    #[arg(long)]
    pub explain: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Detection result for one input file
#[derive(Debug)]
struct Document {
    source: String,
    tokens: Vec<Token>,
    phrases: Vec<Phrase>,
    trace: Vec<RuleHit>,
}

/// Settings after merging flags over the configuration file
#[derive(Debug)]
struct Settings {
    language: Language,
    mode: DetectionMode,
    format: OutputFormat,
    limits: PhraseLimits,
    pretty_json: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting phrase detection");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let source = LexiconSource::new(settings.language, self.lexicon.clone());
        log::info!("Lexicon: {}", source.display_name());

        let detector = build_detector(&source, &settings)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;
        log::debug!("Processing with {threads} worker thread(s)");

        let documents: Vec<Result<Document>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let document = self.detect_file(&detector, path)?;
                    progress.file_completed(&document.source, document.phrases.len());
                    Ok(document)
                })
                .collect()
        });
        progress.finish();

        let mut formatter = self.create_formatter(settings.format, settings.pretty_json)?;
        for document in documents {
            write_document(formatter.as_mut(), &document?, settings.mode)?;
        }
        formatter.finish()?;

        log::info!("Phrase detection complete");
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let language = match self.language {
            Some(arg) => arg.into(),
            None => config.language()?,
        };
        let mode = match self.mode {
            Some(arg) => arg.into(),
            None => config.mode()?,
        };
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        Ok(Settings {
            language,
            mode,
            format,
            limits: config.limits,
            pretty_json: config.output.pretty_json,
        })
    }

    fn detect_file(&self, detector: &PhraseDetector, path: &Path) -> Result<Document> {
        let text = FileReader::read_text(path)?;
        let tokens = tokenize(&text);
        let phrases = detector.detect(&tokens);
        let trace = if self.explain {
            detector.explain(&tokens)
        } else {
            Vec::new()
        };

        log::debug!(
            "{}: {} words in {} phrases",
            path.display(),
            tokens.len(),
            phrases.len()
        );

        Ok(Document {
            source: FileReader::display_name(path),
            tokens,
            phrases,
            trace,
        })
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => {
                let multiple = self.input.len() > 1 || self.input.iter().any(|p| is_glob(p));
                Box::new(TextFormatter::new(writer).with_headers(multiple))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn build_detector(source: &LexiconSource, settings: &Settings) -> Result<PhraseDetector> {
    let mut builder = DetectorConfig::builder()
        .language(settings.language.code())
        .mode(settings.mode.as_str())
        .limits(settings.limits);
    if let Some(lexicon) = source.load()? {
        builder = builder.lexicon(lexicon);
    }

    let config = builder.build().map_err(CliError::from)?;
    Ok(PhraseDetector::with_config(config).map_err(CliError::from)?)
}

fn write_document(
    formatter: &mut dyn OutputFormatter,
    document: &Document,
    mode: DetectionMode,
) -> Result<()> {
    formatter.begin_document(&document.source, mode)?;
    for phrase in &document.phrases {
        formatter.format_phrase(phrase)?;
    }
    for hit in &document.trace {
        if let Some(token) = document.tokens.get(hit.index) {
            formatter.format_rule_hit(hit, token)?;
        }
    }
    Ok(())
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
