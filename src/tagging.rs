//! Tag extraction.
//!
//! Analysis runs three passes over the preprocessed text:
//!
//! 1. [`CandidateExtractor`] fills one [`FrequencyList`] per heuristic.
//! 2. [`ConflictResolver`] gates by frequency, arbitrates between lists that
//!    saw the same phrase and applies the scoring boosts.
//! 3. [`Reranker`] down-weights words and bigrams already covered by a
//!    stronger phrase, truncates and appends the tag constants.
//!
//! [`Tagger`] wires the passes together.

pub mod context;
pub mod extractor;
pub mod frequency;
pub mod reranker;
pub mod resolver;
pub mod tag_set;
pub mod tagger;
pub mod term;

pub use context::AnalysisContext;
pub use extractor::{CandidateExtractor, Candidates};
pub use frequency::FrequencyList;
pub use reranker::Reranker;
pub use resolver::ConflictResolver;
pub use tag_set::TagSet;
pub use tagger::{Tag, Tagger};
pub use term::{Term, TermType};
