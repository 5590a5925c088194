//! Snowball stemmer backed by `rust_stemmers`.
//!
//! # Examples
//!
//! ```
//! use autotag::analysis::stemmer::{SnowballStemmer, Stemmer};
//!
//! let stemmer = SnowballStemmer::english();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("cities"), "citi");
//! ```

use rust_stemmers::Algorithm;

use crate::analysis::stemmer::Stemmer;

/// Language-specific Snowball stemmer. English is the Porter2 algorithm.
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
    algorithm: Algorithm,
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballStemmer {
            stemmer: rust_stemmers::Stemmer::create(algorithm),
            algorithm,
        }
    }

    /// English (Porter2) stemmer.
    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stems() {
        let stemmer = SnowballStemmer::english();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("city"), "citi");
        assert_eq!(stemmer.stem("cities"), "citi");
        assert_eq!(stemmer.stem("beatles"), "beatl");
        assert_eq!(stemmer.name(), "snowball");
    }

    #[test]
    fn test_words_left_alone() {
        let stemmer = SnowballStemmer::default();

        assert_eq!(stemmer.stem("york"), "york");
        assert_eq!(stemmer.stem("nasa"), "nasa");
        assert_eq!(stemmer.stem("mp3"), "mp3");
    }
}
