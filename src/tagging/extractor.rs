//! First pass: candidate extraction.
//!
//! Four independent views of the text each feed their own [`FrequencyList`]:
//!
//! | list                   | source text            | heuristic                         |
//! |------------------------|------------------------|-----------------------------------|
//! | special terms          | original               | acronyms, initialisms, CamelCase  |
//! | capitalised compounds  | boundary-marked        | 2-4 capitalised words             |
//! | simple bigrams         | boundary-marked        | adjacent non-stopwords            |
//! | single terms           | stopword-free tokens   | words above the length cutoff     |

use regex::Regex;

use crate::analysis::preprocess::{PreprocessedText, compile};
use crate::error::Result;
use crate::tagging::context::AnalysisContext;
use crate::tagging::frequency::FrequencyList;
use crate::tagging::term::{Term, TermType};

/// Hyphenated short forms (`e-mail`), initialisms (`U.S.A.`), caps-with-digits
/// tokens (`MP3`, `C++`) and CamelCase words (`JavaScript`), optionally followed
/// by up to two capitalised words and a number (`NASA Apollo 11`).
const SPECIAL_TERMS_PATTERN: &str = concat!(
    r"\b(?:[A-Za-z]{1,2}-[A-Za-z]+)",
    r"|(?:(?:[A-Z]\.){2,})",
    r"|(?:(?:[A-Z][A-Z0-9:_+-]+|[A-Z]+[a-z]*?[A-Z][a-z]*?)",
    r"(?: [A-Z][A-Za-z]+)?(?: [A-Z][A-Za-z]+)?(?: [0-9]*(?:\.[0-9]*)?)?)\b",
);

/// Two to four capitalised words, allowing `Mc`/`Mac` prefixes, a hyphen
/// between the second and third word and an inner "of".
const CAPITALIZED_NGRAM_PATTERN: &str = concat!(
    r"(?:[A-Z][a-z]*)?[A-Z][a-z]+ (?:of )?(?:Mc|Mac)?[A-Z][a-z]+",
    r"(?:[ -][A-Z][a-z]+)?(?: [A-Z][a-z]+)?",
);

/// Both halves of a simple bigram must be longer than this.
const BIGRAM_TOKEN_LENGTH_CUTOFF: usize = 2;

/// The four candidate lists, stored in resolution priority order.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    pub(crate) lists: [FrequencyList; 4],
}

impl Candidates {
    /// Order in which the lists are resolved. Earlier lists get first claim on
    /// a phrase that appears in several of them.
    pub const RESOLUTION_ORDER: [TermType; 4] = [
        TermType::Special,
        TermType::CapitalizedCompound,
        TermType::SimpleBigram,
        TermType::Single,
    ];

    pub(crate) const SPECIAL: usize = 0;
    pub(crate) const CAPITALIZED: usize = 1;
    pub(crate) const BIGRAMS: usize = 2;
    pub(crate) const SINGLES: usize = 3;

    pub(crate) fn position(term_type: TermType) -> Option<usize> {
        Self::RESOLUTION_ORDER.iter().position(|&t| t == term_type)
    }

    pub fn special(&self) -> &FrequencyList {
        &self.lists[Self::SPECIAL]
    }

    pub fn capitalized(&self) -> &FrequencyList {
        &self.lists[Self::CAPITALIZED]
    }

    pub fn bigrams(&self) -> &FrequencyList {
        &self.lists[Self::BIGRAMS]
    }

    pub fn singles(&self) -> &FrequencyList {
        &self.lists[Self::SINGLES]
    }

    /// Total number of distinct candidates across all lists.
    pub fn len(&self) -> usize {
        self.lists.iter().map(FrequencyList::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(FrequencyList::is_empty)
    }

    fn add(&mut self, term: Term) {
        if let Some(i) = Self::position(term.term_type()) {
            self.lists[i].add(term);
        }
    }
}

/// Builds the four candidate lists from preprocessed text.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    special_terms: Regex,
    capitalized_ngrams: Regex,
}

impl CandidateExtractor {
    pub fn new() -> Result<Self> {
        Ok(CandidateExtractor {
            special_terms: compile(SPECIAL_TERMS_PATTERN)?,
            capitalized_ngrams: compile(CAPITALIZED_NGRAM_PATTERN)?,
        })
    }

    /// Extract candidates. `text` is the raw input that `preprocessed` was built from.
    pub fn extract(
        &self,
        text: &str,
        preprocessed: &PreprocessedText,
        ctx: &AnalysisContext<'_>,
    ) -> Candidates {
        let mut candidates = Candidates::default();

        self.extract_single_terms(preprocessed, ctx, &mut candidates);
        if ctx.config.extract_special_terms {
            self.extract_special_terms(text, ctx, &mut candidates);
        }
        self.extract_capitalized_compounds(preprocessed, ctx, &mut candidates);
        self.extract_bigrams(preprocessed, ctx, &mut candidates);

        candidates
    }

    fn extract_single_terms(
        &self,
        preprocessed: &PreprocessedText,
        ctx: &AnalysisContext<'_>,
        candidates: &mut Candidates,
    ) {
        let boost = ctx.config.boosts.single_term;
        for token in &preprocessed.tokens {
            if token.chars().count() > ctx.config.token_length_cutoff {
                let identity = ctx.identity(token, TermType::Single);
                candidates.add(Term::new(token.as_str(), identity, TermType::Single).with_boost(boost));
            }
        }
    }

    fn extract_special_terms(&self, text: &str, ctx: &AnalysisContext<'_>, candidates: &mut Candidates) {
        let boost = ctx.config.boosts.special_term;
        for m in self.special_terms.find_iter(text) {
            let value = m.as_str().trim();
            if value.is_empty() {
                continue;
            }
            let identity = ctx.identity(value, TermType::Special);
            candidates.add(Term::new(value, identity, TermType::Special).with_boost(boost));
        }
    }

    fn extract_capitalized_compounds(
        &self,
        preprocessed: &PreprocessedText,
        ctx: &AnalysisContext<'_>,
        candidates: &mut Candidates,
    ) {
        let boost = ctx.config.boosts.capitalized_ngram;
        for m in self.capitalized_ngrams.find_iter(&preprocessed.boundary_marked) {
            let mut value = m.as_str();

            // "The Beatles" is recorded as "Beatles"
            if let Some((first, rest)) = value.split_once(' ') {
                if ctx.is_blocked(first) {
                    value = rest;
                }
            }

            let identity = ctx.identity(value, TermType::CapitalizedCompound);
            candidates.add(
                Term::new(value, identity, TermType::CapitalizedCompound).with_boost(boost),
            );
        }
    }

    fn extract_bigrams(
        &self,
        preprocessed: &PreprocessedText,
        ctx: &AnalysisContext<'_>,
        candidates: &mut Candidates,
    ) {
        let boost = ctx.config.boosts.bigram;
        let tokens: Vec<&str> = preprocessed.boundary_tokens().collect();

        for pair in tokens.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            let eligible = |token: &str| {
                token.chars().count() > BIGRAM_TOKEN_LENGTH_CUTOFF && !ctx.is_blocked(token)
            };

            if eligible(first) && eligible(second) {
                let value = format!("{first} {second}");
                let identity = ctx.identity(&value, TermType::SimpleBigram);
                candidates.add(Term::new(value, identity, TermType::SimpleBigram).with_boost(boost));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::preprocess::Preprocessor;
    use crate::analysis::stemmer::{CachedStemmer, SnowballStemmer};
    use crate::config::TaggerConfig;
    use crate::lexicon::Lexicon;

    fn extract(text: &str) -> Candidates {
        let config = TaggerConfig::default();
        let lexicon = Lexicon::default();
        let stemmer = CachedStemmer::new(Box::new(SnowballStemmer::english()));
        let ctx = AnalysisContext::new(&config, &lexicon, &stemmer);

        let preprocessed = Preprocessor::new(&config.boundary, true)
            .unwrap()
            .process(text, &lexicon);
        CandidateExtractor::new()
            .unwrap()
            .extract(text, &preprocessed, &ctx)
    }

    fn values(list: &FrequencyList) -> Vec<String> {
        list.terms().iter().map(|t| t.value().to_string()).collect()
    }

    #[test]
    fn test_single_term_frequency_merges() {
        let candidates = extract("cat cat cat");
        let cat = candidates.singles().get("cat").unwrap();

        assert_eq!(cat.frequency(), 3);
        assert_eq!(cat.boost(), 0.75);
        assert_eq!(candidates.singles().len(), 1);
    }

    #[test]
    fn test_single_terms_share_stemmed_identity() {
        let candidates = extract("Cities and a city");
        let city = candidates.singles().get("citi").unwrap();

        assert_eq!(city.frequency(), 2);
        assert_eq!(city.value(), "city");
    }

    #[test]
    fn test_short_tokens_skipped() {
        let candidates = extract("ox is an ox");
        assert!(candidates.singles().is_empty());
    }

    #[test]
    fn test_special_terms() {
        let candidates = extract("NASA and the U.S.A. love JavaScript and e-mail.");
        let special = values(candidates.special());

        assert!(special.contains(&"NASA".to_string()));
        assert!(special.contains(&"U.S.A.".to_string()));
        assert!(special.contains(&"JavaScript".to_string()));
        assert!(special.contains(&"e-mail".to_string()));
        for term in candidates.special().terms() {
            assert!(term.ignore_frequency_cutoff());
            assert_eq!(term.boost(), 2.5);
        }
    }

    #[test]
    fn test_special_term_with_continuation() {
        let candidates = extract("launched by NASA Apollo 11 yesterday");
        assert_eq!(values(candidates.special()), vec!["NASA Apollo 11"]);
    }

    #[test]
    fn test_plain_capitalised_word_is_not_special() {
        let candidates = extract("Apple");
        assert!(candidates.special().is_empty());
        assert!(candidates.capitalized().is_empty());
    }

    #[test]
    fn test_capitalized_compounds_all_occurrences() {
        let candidates = extract("John Smith moved to New York. John Smith left.");
        let compounds = candidates.capitalized();

        assert_eq!(compounds.get("john smith").unwrap().frequency(), 2);
        assert!(compounds.contains("new york"));
        assert_eq!(compounds.get("new york").unwrap().boost(), 3.5);
    }

    #[test]
    fn test_capitalized_compound_variants() {
        let candidates = extract("visited the Bank of England and met Ronald McDonald there");
        let compounds = values(candidates.capitalized());

        assert!(compounds.contains(&"Bank of England".to_string()));
        assert!(compounds.contains(&"Ronald McDonald".to_string()));
    }

    #[test]
    fn test_leading_stopword_stripped_from_compound() {
        let candidates = extract("I like The Beatles");
        let compounds = values(candidates.capitalized());

        assert_eq!(compounds, vec!["Beatles"]);
        assert!(candidates.capitalized().contains("beatles"));
    }

    #[test]
    fn test_no_compound_across_boundary() {
        let candidates = extract("Stop. John Smith");

        assert!(!candidates.capitalized().contains("stop john"));
        assert!(!candidates.bigrams().contains("stop john"));
        assert!(candidates.capitalized().contains("john smith"));
        assert!(candidates.bigrams().contains("john smith"));
    }

    #[test]
    fn test_bigrams_skip_stopwords_and_short_tokens() {
        let candidates = extract("big data is on the rise of data science");
        let bigrams = values(candidates.bigrams());

        assert_eq!(bigrams, vec!["big data", "data science"]);
        for term in candidates.bigrams().terms() {
            assert_eq!(term.boost(), 2.5);
            assert!(!term.ignore_frequency_cutoff());
        }
    }

    #[test]
    fn test_empty_text_has_no_candidates() {
        let candidates = extract("  ");
        assert!(candidates.is_empty());
        assert_eq!(candidates.len(), 0);
    }
}
