//! Configuration for the tagging engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AutotagError, Result};

/// Default sentinel inserted at sentence and structural breaks.
pub const DEFAULT_BOUNDARY: &str = "##!##";

/// Default separator used when rendering multi-word tags.
pub const DEFAULT_COMPOUND_TAG_SEPARATOR: &str = " ";

/// Multiplicative boost constants applied while scoring candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    /// Initial boost of every single-word candidate.
    pub single_term: f64,
    /// Applied to every candidate found in the whitelist.
    pub whitelist: f64,
    /// Applied once to capitalised single words and again if the word is all caps.
    pub capitalization: f64,
    /// Initial boost of capitalised two-to-four word phrases.
    pub capitalized_ngram: f64,
    /// Initial boost of abbreviations, acronyms and CamelCase words.
    pub special_term: f64,
    /// Initial boost of plain adjacent word pairs.
    pub bigram: f64,
    /// Applied to bigrams already covered by a higher scoring capitalised phrase.
    pub bigram_already_detected: f64,
    /// Applied to single words already covered by a higher scoring compound.
    pub term_from_compound: f64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            single_term: 0.75,
            whitelist: 1.5,
            capitalization: 1.75,
            capitalized_ngram: 3.5,
            special_term: 2.5,
            bigram: 2.5,
            bigram_already_detected: 0.25,
            term_from_compound: 0.25,
        }
    }
}

impl BoostConfig {
    fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("single_term", self.single_term),
            ("whitelist", self.whitelist),
            ("capitalization", self.capitalization),
            ("capitalized_ngram", self.capitalized_ngram),
            ("special_term", self.special_term),
            ("bigram", self.bigram),
            ("bigram_already_detected", self.bigram_already_detected),
            ("term_from_compound", self.term_from_compound),
        ]
    }
}

/// Configuration of a [`Tagger`](crate::tagging::Tagger) instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Single tokens must be longer than this many characters.
    pub token_length_cutoff: usize,
    /// Candidates must occur more often than this unless exempt or whitelisted.
    pub frequency_cutoff: u32,
    /// Candidates must score strictly above this to be kept.
    pub score_cutoff: f64,
    /// Stem single-word identities with the English Snowball stemmer.
    pub apply_stemming: bool,
    /// Lowercase tag values after scoring.
    pub lowercase: bool,
    /// Extract abbreviations, acronyms and CamelCase words.
    pub extract_special_terms: bool,
    /// Drop standalone numbers of one to three digits.
    pub remove_short_numbers: bool,
    /// Sentinel token marking hard breaks between sentences.
    pub boundary: String,
    /// Separator substituted for spaces when rendering multi-word tags.
    pub compound_tag_separator: String,
    /// Append the lexicon's tag constants after truncation.
    pub append_tag_constants: bool,
    /// Boost constants.
    pub boosts: BoostConfig,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            token_length_cutoff: 2,
            frequency_cutoff: 1,
            score_cutoff: 0.0,
            apply_stemming: true,
            lowercase: true,
            extract_special_terms: true,
            remove_short_numbers: true,
            boundary: DEFAULT_BOUNDARY.to_string(),
            compound_tag_separator: DEFAULT_COMPOUND_TAG_SEPARATOR.to_string(),
            append_tag_constants: true,
            boosts: BoostConfig::default(),
        }
    }
}

impl TaggerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TaggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check that every setting can produce meaningful output.
    pub fn validate(&self) -> Result<()> {
        if !self.score_cutoff.is_finite() || self.score_cutoff < 0.0 {
            return Err(AutotagError::invalid_config(format!(
                "score_cutoff must be a non-negative number, got {}",
                self.score_cutoff
            )));
        }

        for (name, value) in self.boosts.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(AutotagError::invalid_config(format!(
                    "boost '{name}' must be a positive number, got {value}"
                )));
            }
        }

        if self.boundary.is_empty() || self.boundary.chars().any(char::is_whitespace) {
            return Err(AutotagError::invalid_config(format!(
                "boundary token must be non-empty and contain no whitespace, got {:?}",
                self.boundary
            )));
        }

        if self.compound_tag_separator.is_empty() {
            return Err(AutotagError::invalid_config(
                "compound_tag_separator must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagger_config_default() {
        let config = TaggerConfig::default();
        assert_eq!(config.token_length_cutoff, 2);
        assert_eq!(config.frequency_cutoff, 1);
        assert_eq!(config.score_cutoff, 0.0);
        assert!(config.apply_stemming);
        assert!(config.lowercase);
        assert!(config.extract_special_terms);
        assert!(config.remove_short_numbers);
        assert_eq!(config.boundary, "##!##");
        assert_eq!(config.compound_tag_separator, " ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_boost_defaults() {
        let boosts = BoostConfig::default();
        assert_eq!(boosts.single_term, 0.75);
        assert_eq!(boosts.whitelist, 1.5);
        assert_eq!(boosts.capitalization, 1.75);
        assert_eq!(boosts.capitalized_ngram, 3.5);
        assert_eq!(boosts.special_term, 2.5);
        assert_eq!(boosts.bigram, 2.5);
        assert_eq!(boosts.bigram_already_detected, 0.25);
        assert_eq!(boosts.term_from_compound, 0.25);
    }

    #[test]
    fn test_negative_score_cutoff_rejected() {
        let config = TaggerConfig {
            score_cutoff: -1.0,
            ..TaggerConfig::default()
        };
        assert!(matches!(config.validate(), Err(AutotagError::Config(_))));
    }

    #[test]
    fn test_invalid_boost_rejected() {
        let mut config = TaggerConfig::default();
        config.boosts.bigram = f64::NAN;
        assert!(config.validate().is_err());

        config.boosts.bigram = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_with_whitespace_rejected() {
        let config = TaggerConfig {
            boundary: "## ##".to_string(),
            ..TaggerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            TaggerConfig::from_json_str(r#"{"frequency_cutoff": 0, "boosts": {"bigram": 3.0}}"#)
                .unwrap();
        assert_eq!(config.frequency_cutoff, 0);
        assert_eq!(config.boosts.bigram, 3.0);
        assert_eq!(config.boosts.whitelist, 1.5);
        assert!(config.lowercase);
    }

    #[test]
    fn test_negative_frequency_cutoff_in_json_rejected() {
        let result = TaggerConfig::from_json_str(r#"{"frequency_cutoff": -1}"#);
        assert!(matches!(result, Err(AutotagError::Json(_))));
    }
}
