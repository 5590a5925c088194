//! Command line argument parsing for the autotag CLI using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Autotag - weighted keyword extraction for free-form text
#[derive(Parser, Debug, Clone)]
#[command(name = "autotag")]
#[command(about = "Extract weighted tags from free-form text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutotagArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutotagArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract tags from text, a file or stdin
    Analyze(AnalyzeArgs),

    /// Print the effective tagger configuration
    Config(ConfigArgs),
}

/// Word lists and tagger settings shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct TaggerOptions {
    /// Tagger configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Disable stemming of single words
    #[arg(long)]
    pub no_stemming: bool,

    /// Keep the original casing of tags
    #[arg(long)]
    pub keep_case: bool,

    /// Skip acronym and CamelCase extraction
    #[arg(long)]
    pub no_special_terms: bool,

    /// Terms seen this many times or fewer are dropped
    #[arg(long, value_name = "N")]
    pub frequency_cutoff: Option<u32>,

    /// Separator placed between the words of multi-word tags
    #[arg(long, value_name = "SEPARATOR")]
    pub separator: Option<String>,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File to analyze (stdin when neither --text nor --file is given)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Maximum number of tags to return
    #[arg(short = 'n', long, default_value = "10")]
    pub max_tags: usize,

    /// Stopword list, one word per line
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Whitelist, one word per line
    #[arg(long, value_name = "WHITELIST_FILE")]
    pub whitelist: Option<PathBuf>,

    /// Tags appended to every result, one per line
    #[arg(long, value_name = "CONSTANTS_FILE")]
    pub constants: Option<PathBuf>,

    #[command(flatten)]
    pub tagger: TaggerOptions,
}

/// Arguments for printing the configuration
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub tagger: TaggerOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_analyze_command() {
        let args = AutotagArgs::try_parse_from([
            "autotag",
            "analyze",
            "--text",
            "NASA launched a rocket",
            "--max-tags",
            "5",
            "--no-stemming",
            "--separator",
            "_",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.text.as_deref(), Some("NASA launched a rocket"));
            assert_eq!(analyze_args.max_tags, 5);
            assert!(analyze_args.tagger.no_stemming);
            assert_eq!(analyze_args.tagger.separator.as_deref(), Some("_"));
            assert!(analyze_args.file.is_none());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_word_lists() {
        let args = AutotagArgs::try_parse_from([
            "autotag",
            "analyze",
            "--file",
            "article.txt",
            "--stopwords",
            "stop.txt",
            "--whitelist",
            "white.txt",
            "--constants",
            "constants.txt",
            "--config",
            "tagger.json",
            "--frequency-cutoff",
            "0",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.file, Some(PathBuf::from("article.txt")));
            assert_eq!(analyze_args.stopwords, Some(PathBuf::from("stop.txt")));
            assert_eq!(analyze_args.whitelist, Some(PathBuf::from("white.txt")));
            assert_eq!(analyze_args.constants, Some(PathBuf::from("constants.txt")));
            assert_eq!(analyze_args.tagger.config, Some(PathBuf::from("tagger.json")));
            assert_eq!(analyze_args.tagger.frequency_cutoff, Some(0));
            assert_eq!(analyze_args.max_tags, 10);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = AutotagArgs::try_parse_from([
            "autotag", "analyze", "--text", "hello", "--file", "a.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_max_tags_rejected() {
        let result = AutotagArgs::try_parse_from(["autotag", "analyze", "--max-tags", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = AutotagArgs::try_parse_from(["autotag", "config"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = AutotagArgs::try_parse_from(["autotag", "-vv", "config"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = AutotagArgs::try_parse_from(["autotag", "config", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = AutotagArgs::try_parse_from(["autotag", "--quiet", "-v", "config"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            AutotagArgs::try_parse_from(["autotag", "--format", "json", "--pretty", "config"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
