//! Static word lists consulted by the tagging engine.
//!
//! A [`Lexicon`] bundles three pieces of external data:
//!
//! - a stopword set, removed before single terms are counted and never
//!   allowed inside a bigram,
//! - a [`Whitelist`] of words and phrases that always receive the whitelist
//!   boost and bypass the frequency cutoff,
//! - an ordered list of tag constants appended to every result.
//!
//! All membership tests are case-insensitive; entries are stored lowercased.
//!
//! # Examples
//!
//! ```
//! use autotag::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builder()
//!     .whitelist(["rust", "new york"])
//!     .tag_constants(["blog"])
//!     .build();
//!
//! assert!(lexicon.is_stopword("The"));
//! assert!(lexicon.whitelist().contains("New York"));
//! assert_eq!(lexicon.tag_constants(), ["blog"]);
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;

use crate::error::{AutotagError, Result};

/// Default English stop words.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "either",
    "else", "ever", "every", "few", "for", "from", "further", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "let", "may", "me", "might", "more", "most",
    "must", "my", "myself", "neither", "no", "nor", "not", "now", "of", "off", "often", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "since", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "though", "through", "thus", "to", "too", "under", "until", "up", "upon", "us", "very", "was",
    "we", "were", "what", "when", "where", "whether", "which", "while", "who", "whom", "whose",
    "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Default English stop words as a set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Case-insensitive whitelist with a memoized membership cache.
///
/// The cache is keyed by the exact surface form queried, so repeated lookups of
/// the same token skip lowercasing. It only grows; a key settles once and keeps
/// its answer for the lifetime of the whitelist. Safe to share across threads.
#[derive(Debug, Default)]
pub struct Whitelist {
    words: AHashSet<String>,
    cache: RwLock<AHashMap<String, bool>>,
}

impl Whitelist {
    /// Create a whitelist from the given entries.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Whitelist {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            cache: RwLock::new(AHashMap::new()),
        }
    }

    /// Check whether `value` is whitelisted, ignoring case.
    pub fn contains(&self, value: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }

        if let Some(&hit) = self.cache.read().get(value) {
            return hit;
        }

        let hit = self.words.contains(&value.to_lowercase());
        *self
            .cache
            .write()
            .entry(value.to_string())
            .or_insert(hit)
    }

    /// Number of whitelisted entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the whitelist is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of memoized lookups.
    pub fn cached_lookups(&self) -> usize {
        self.cache.read().len()
    }
}

/// Stopwords, whitelist and tag constants used by one engine instance.
#[derive(Debug)]
pub struct Lexicon {
    stopwords: AHashSet<String>,
    whitelist: Whitelist,
    tag_constants: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            stopwords: DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            whitelist: Whitelist::default(),
            tag_constants: Vec::new(),
        }
    }
}

impl Lexicon {
    /// Start building a lexicon from the default English stopwords.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Check whether `word` is a stopword, ignoring case.
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// The whitelist.
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Tag constants in configured order.
    pub fn tag_constants(&self) -> &[String] {
        &self.tag_constants
    }
}

/// Builder for [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    stopwords: Option<Vec<String>>,
    whitelist: Vec<String>,
    tag_constants: Vec<String>,
}

impl LexiconBuilder {
    /// Replace the default stopwords.
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Set the whitelist entries.
    pub fn whitelist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.whitelist = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tag constants, kept in the given order.
    pub fn tag_constants<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_constants = tags
            .into_iter()
            .map(|t| {
                let t: String = t.into();
                t.trim().to_string()
            })
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// Build the lexicon.
    pub fn build(self) -> Lexicon {
        let stopwords = match self.stopwords {
            Some(words) => words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            None => DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
        };

        Lexicon {
            stopwords,
            whitelist: Whitelist::new(self.whitelist),
            tag_constants: self.tag_constants,
        }
    }
}

/// Read a word list with one entry per line.
///
/// Blank lines and lines starting with `#` are skipped; entries are trimmed.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        AutotagError::lexicon(format!("failed to read {}: {e}", path.display()))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
