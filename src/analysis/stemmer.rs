//! Stemming algorithms and the memoizing stem cache.

use ahash::AHashMap;
use parking_lot::RwLock;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a lowercase word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod snowball;

pub use identity::IdentityStemmer;
pub use snowball::SnowballStemmer;

/// A stemmer wrapped with a word → root cache.
///
/// Input is lowercased before lookup, so `"Running"` and `"running"` share
/// one entry. The cache is append-only and safe to share between threads:
/// two threads racing on the same word may both run the stemmer, but the
/// first stored root wins and is what both observe afterwards.
pub struct CachedStemmer {
    stemmer: Box<dyn Stemmer>,
    cache: RwLock<AHashMap<String, String>>,
}

impl std::fmt::Debug for CachedStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedStemmer")
            .field("stemmer", &self.stemmer.name())
            .field("cached", &self.cache.read().len())
            .finish()
    }
}

impl CachedStemmer {
    /// Wrap `stemmer` with an empty cache.
    pub fn new(stemmer: Box<dyn Stemmer>) -> Self {
        CachedStemmer {
            stemmer,
            cache: RwLock::new(AHashMap::new()),
        }
    }

    /// Lowercase `word` and return its root.
    pub fn stem(&self, word: &str) -> String {
        let key = word.to_lowercase();
        if let Some(root) = self.cache.read().get(&key) {
            return root.clone();
        }

        let root = self.stemmer.stem(&key);
        self.cache.write().entry(key).or_insert(root).clone()
    }

    /// Name of the wrapped stemmer.
    pub fn name(&self) -> &'static str {
        self.stemmer.name()
    }

    /// Number of cached words.
    pub fn cached_words(&self) -> usize {
        self.cache.read().len()
    }
}
