//! `phrasal` command-line entry point

use clap::Parser;
use phrasal_cli::commands::Commands;

/// Group German and English text into phrases for read-aloud highlighting
#[derive(Debug, Parser)]
#[command(name = "phrasal", author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_about_comes_from_doc_comment() {
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert_eq!(
            about.as_deref(),
            Some("Group German and English text into phrases for read-aloud highlighting")
        );
    }

    #[test]
    fn test_parse_detect_flags() {
        let cli = Cli::try_parse_from([
            "phrasal", "detect", "-i", "a.txt", "-i", "b.txt", "-l", "english", "-m", "adaptive",
            "-f", "json", "--explain", "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Detect(args) => {
                assert_eq!(args.input, vec!["a.txt", "b.txt"]);
                assert!(args.explain);
                assert_eq!(args.verbose, 2);
            }
            other => panic!("expected detect, got {other:?}"),
        }
    }

    #[test]
    fn test_detect_requires_input() {
        assert!(Cli::try_parse_from(["phrasal", "detect"]).is_err());
    }
}
