//! Shared state borrowed by every pipeline stage during one analysis.

use crate::analysis::stemmer::CachedStemmer;
use crate::config::TaggerConfig;
use crate::lexicon::Lexicon;
use crate::tagging::term::TermType;

/// Engine-owned configuration, word lists and stem cache.
#[derive(Clone, Copy, Debug)]
pub struct AnalysisContext<'a> {
    pub config: &'a TaggerConfig,
    pub lexicon: &'a Lexicon,
    pub stemmer: &'a CachedStemmer,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(config: &'a TaggerConfig, lexicon: &'a Lexicon, stemmer: &'a CachedStemmer) -> Self {
        AnalysisContext {
            config,
            lexicon,
            stemmer,
        }
    }

    /// Dedup key for `value`: stemmed when it is a single word, lowercased otherwise.
    pub fn identity(&self, value: &str, term_type: TermType) -> String {
        if term_type.is_compound() {
            value.to_lowercase()
        } else {
            self.stemmer.stem(value)
        }
    }

    /// Root of a single word.
    pub fn root(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Stopwords and the boundary token may not take part in a compound.
    pub fn is_blocked(&self, token: &str) -> bool {
        token == self.config.boundary || self.lexicon.is_stopword(token)
    }

    /// Case-insensitive whitelist membership.
    pub fn is_whitelisted(&self, value: &str) -> bool {
        self.lexicon.whitelist().contains(value)
    }
}
