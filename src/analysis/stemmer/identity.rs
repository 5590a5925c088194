//! Identity stemmer implementation.

use crate::analysis::stemmer::Stemmer;

/// Stemmer used when stemming is switched off: words are only lowercased.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
