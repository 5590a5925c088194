use std::fs;

use autotag::config::TaggerConfig;
use autotag::error::{AutotagError, Result};
use autotag::lexicon::{Lexicon, load_word_list};
use autotag::tagging::{Tagger, TermType};
use tempfile::TempDir;

#[test]
fn test_word_lists_from_files() -> Result<()> {
    // 1. Write the word lists
    let dir = TempDir::new()?;
    let stopwords = dir.path().join("stopwords.txt");
    let whitelist = dir.path().join("whitelist.txt");
    let constants = dir.path().join("constants.txt");

    fs::write(&stopwords, "# English\nthe\nand\n\nof\n")?;
    fs::write(&whitelist, "  Rust  \nTokio\n")?;
    fs::write(&constants, "programming\n# trailing comment\n")?;

    // 2. Load them
    assert_eq!(load_word_list(&stopwords)?, vec!["the", "and", "of"]);
    let lexicon = Lexicon::builder()
        .stopwords(load_word_list(&stopwords)?)
        .whitelist(load_word_list(&whitelist)?)
        .tag_constants(load_word_list(&constants)?)
        .build();

    assert_eq!(lexicon.stopword_count(), 3);
    assert!(lexicon.whitelist().contains("rust"));
    assert!(lexicon.whitelist().contains("TOKIO"));

    // 3. Analyze with them
    let tagger = Tagger::with_lexicon(TaggerConfig::default(), lexicon)?;
    let tags = tagger.analyze("Rust and Tokio.", 10)?;

    let values: Vec<&str> = tags.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["rust", "tokio", "programming"]);
    assert_eq!(tags[2].term_type, TermType::TagConstant);
    Ok(())
}

#[test]
fn test_missing_word_list() {
    let dir = TempDir::new().unwrap();
    let err = load_word_list(dir.path().join("missing.txt")).unwrap_err();

    assert!(matches!(err, AutotagError::Lexicon(_)));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_config_from_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("tagger.json");
    fs::write(
        &path,
        r#"{
            "frequency_cutoff": 0,
            "lowercase": false,
            "boosts": { "special_term": 5.0 }
        }"#,
    )?;

    let config = TaggerConfig::from_json_file(&path)?;
    assert_eq!(config.frequency_cutoff, 0);
    assert!(!config.lowercase);
    assert_eq!(config.boosts.special_term, 5.0);
    assert_eq!(config.boosts.bigram, 2.5);

    let tags = Tagger::new(config)?.analyze("NASA", 10)?;
    assert_eq!(tags[0].value, "NASA");
    assert_eq!(tags[0].score, 5.0);
    Ok(())
}

#[test]
fn test_invalid_config_files() {
    let dir = TempDir::new().unwrap();

    let malformed = dir.path().join("malformed.json");
    fs::write(&malformed, "{ not json").unwrap();
    assert!(matches!(
        TaggerConfig::from_json_file(&malformed),
        Err(AutotagError::Json(_))
    ));

    let negative = dir.path().join("negative.json");
    fs::write(&negative, r#"{ "boosts": { "bigram": -1.0 } }"#).unwrap();
    assert!(matches!(
        TaggerConfig::from_json_file(&negative),
        Err(AutotagError::Config(_))
    ));

    assert!(matches!(
        TaggerConfig::from_json_file(dir.path().join("absent.json")),
        Err(AutotagError::Io(_))
    ));
}
