//! The tagging engine.

use std::time::{Duration, Instant};

use log::debug;
use parking_lot::Mutex;
use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::preprocess::Preprocessor;
use crate::analysis::stemmer::{CachedStemmer, IdentityStemmer, SnowballStemmer, Stemmer};
use crate::config::TaggerConfig;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::tagging::context::AnalysisContext;
use crate::tagging::extractor::CandidateExtractor;
use crate::tagging::reranker::Reranker;
use crate::tagging::resolver::ConflictResolver;
use crate::tagging::tag_set::TagSet;
use crate::tagging::term::{Term, TermType};

/// A rendered tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tag {
    pub value: String,
    pub score: f64,
    pub term_type: TermType,
}

impl Tag {
    fn from_term(term: Term, separator: &str) -> Self {
        let value = if separator != " " && term.value().contains(' ') {
            term.value().replace(' ', separator)
        } else {
            term.value().to_string()
        };

        Tag {
            value,
            score: term.score(),
            term_type: term.term_type(),
        }
    }
}

/// Extracts weighted tags from free-form text.
///
/// A `Tagger` owns its configuration, word lists and stem cache and is
/// immutable during analysis apart from the caches and the recorded timing,
/// so it can be shared between threads.
///
/// # Example
///
/// ```
/// use autotag::config::TaggerConfig;
/// use autotag::tagging::Tagger;
///
/// let tagger = Tagger::new(TaggerConfig::default()).unwrap();
/// let tags = tagger.analyze("NASA launched a rocket.", 5).unwrap();
/// assert_eq!(tags[0].value, "nasa");
/// ```
#[derive(Debug)]
pub struct Tagger {
    config: TaggerConfig,
    lexicon: Lexicon,
    stemmer: CachedStemmer,
    preprocessor: Preprocessor,
    extractor: CandidateExtractor,
    last_elapsed: Mutex<Duration>,
}

impl Tagger {
    /// Create a tagger with the default English stopwords and no whitelist.
    pub fn new(config: TaggerConfig) -> Result<Self> {
        Self::with_lexicon(config, Lexicon::default())
    }

    /// Create a tagger with custom word lists. The stemmer is the Snowball
    /// stemmer when `apply_stemming` is set, otherwise identity.
    pub fn with_lexicon(config: TaggerConfig, lexicon: Lexicon) -> Result<Self> {
        let stemmer: Box<dyn Stemmer> = if config.apply_stemming {
            Box::new(SnowballStemmer::english())
        } else {
            Box::new(IdentityStemmer::new())
        };
        Self::with_stemmer(config, lexicon, stemmer)
    }

    /// Create a tagger with an explicit stemmer.
    pub fn with_stemmer(
        config: TaggerConfig,
        lexicon: Lexicon,
        stemmer: Box<dyn Stemmer>,
    ) -> Result<Self> {
        config.validate()?;

        let preprocessor = Preprocessor::new(&config.boundary, config.remove_short_numbers)?;
        let extractor = CandidateExtractor::new()?;

        debug!(
            "tagger ready: stemmer={}, stopwords={}, whitelist={}, tag constants={}",
            stemmer.name(),
            lexicon.stopword_count(),
            lexicon.whitelist().len(),
            lexicon.tag_constants().len()
        );

        Ok(Tagger {
            config,
            lexicon,
            stemmer: CachedStemmer::new(stemmer),
            preprocessor,
            extractor,
            last_elapsed: Mutex::new(Duration::ZERO),
        })
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Name of the underlying stemmer.
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }

    /// Extract up to `max_tags` tags from `text`, best first, followed by the
    /// configured tag constants.
    pub fn analyze(&self, text: &str, max_tags: usize) -> Result<Vec<Tag>> {
        let start = Instant::now();
        let tags = self.render(self.analyze_terms(text, max_tags));
        let elapsed = start.elapsed();
        *self.last_elapsed.lock() = elapsed;

        debug!("analyzed {} bytes into {} tags in {:?}", text.len(), tags.len(), elapsed);
        Ok(tags)
    }

    /// Analyze several documents in parallel. The recorded elapsed time
    /// covers the whole batch.
    pub fn analyze_batch<S>(&self, texts: &[S], max_tags: usize) -> Result<Vec<Vec<Tag>>>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let results = texts
            .par_iter()
            .map(|text| self.render(self.analyze_terms(text.as_ref(), max_tags)))
            .collect();
        let elapsed = start.elapsed();
        *self.last_elapsed.lock() = elapsed;

        debug!("analyzed batch of {} documents in {:?}", texts.len(), elapsed);
        Ok(results)
    }

    /// Run the pipeline and return the unrendered terms.
    pub fn analyze_terms(&self, text: &str, max_tags: usize) -> TagSet {
        let ctx = self.context();

        let preprocessed = self.preprocessor.process(text, &self.lexicon);
        let candidates = self.extractor.extract(text, &preprocessed, &ctx);
        debug!(
            "candidates: {} special, {} capitalized, {} bigrams, {} singles",
            candidates.special().len(),
            candidates.capitalized().len(),
            candidates.bigrams().len(),
            candidates.singles().len()
        );

        let resolved = ConflictResolver::new(ctx).resolve(candidates);
        debug!("{} terms survived resolution", resolved.len());

        Reranker::new(ctx).finish(resolved, max_tags)
    }

    /// Wall-clock duration of the most recent `analyze` or `analyze_batch`.
    pub fn elapsed_time(&self) -> Duration {
        *self.last_elapsed.lock()
    }

    fn context(&self) -> AnalysisContext<'_> {
        AnalysisContext::new(&self.config, &self.lexicon, &self.stemmer)
    }

    fn render(&self, tags: TagSet) -> Vec<Tag> {
        tags.into_iter()
            .map(|term| Tag::from_term(term, &self.config.compound_tag_separator))
            .collect()
    }
}
