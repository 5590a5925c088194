//! Command implementations for the autotag CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TaggerConfig;
use crate::error::Result;
use crate::lexicon::{Lexicon, load_word_list};
use crate::tagging::Tagger;

/// Execute a CLI command.
pub fn execute_command(args: AutotagArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Config(config_args) => show_config(config_args, &args),
    }
}

/// Extract tags and print them.
fn analyze(args: &AnalyzeArgs, cli_args: &AutotagArgs) -> Result<()> {
    let config = build_config(&args.tagger)?;
    let lexicon = build_lexicon(args)?;
    let tagger = Tagger::with_lexicon(config, lexicon)?;

    let text = read_input(args)?;
    info!("analyzing {} bytes of text", text.len());

    let tags = tagger.analyze(&text, args.max_tags)?;
    let elapsed = tagger.elapsed_time();
    debug!("extracted {} tags in {:?}", tags.len(), elapsed);

    output_tags(
        &TagReport {
            tags,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        },
        cli_args,
    )
}

/// Print the configuration that `analyze` would run with.
fn show_config(args: &ConfigArgs, cli_args: &AutotagArgs) -> Result<()> {
    let config = build_config(&args.tagger)?;
    output_result("Effective configuration", &config, cli_args)
}

/// Load the configuration file, if any, then apply command line overrides.
pub fn build_config(options: &TaggerOptions) -> Result<TaggerConfig> {
    let mut config = match &options.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            TaggerConfig::from_json_file(path)
                .with_context(|| format!("invalid configuration file {}", path.display()))?
        }
        None => TaggerConfig::default(),
    };

    if options.no_stemming {
        config.apply_stemming = false;
    }
    if options.keep_case {
        config.lowercase = false;
    }
    if options.no_special_terms {
        config.extract_special_terms = false;
    }
    if let Some(cutoff) = options.frequency_cutoff {
        config.frequency_cutoff = cutoff;
    }
    if let Some(separator) = &options.separator {
        config.compound_tag_separator = separator.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Assemble the word lists named on the command line.
fn build_lexicon(args: &AnalyzeArgs) -> Result<Lexicon> {
    let mut builder = Lexicon::builder();

    if let Some(path) = &args.stopwords {
        let words = load_word_list(path)?;
        debug!("loaded {} stopwords from {}", words.len(), path.display());
        builder = builder.stopwords(words);
    }
    if let Some(path) = &args.whitelist {
        let words = load_word_list(path)?;
        debug!("loaded {} whitelist entries from {}", words.len(), path.display());
        builder = builder.whitelist(words);
    }
    if let Some(path) = &args.constants {
        builder = builder.tag_constants(load_word_list(path)?);
    }

    Ok(builder.build())
}

fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return read_file(path);
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

fn read_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text)
}
