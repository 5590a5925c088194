//! Text normalisation ahead of candidate extraction.
//!
//! Raw text goes through three rewrites:
//!
//! ```text
//! "Stop. John Smith's car!"
//!   → " Stop. John Smith s car! "            (non-word runs collapsed)
//!   → " Stop ##!## John Smith s car ##!## "  (structural punctuation → boundary)
//!   → ["Stop", "John", "Smith", "s", "car"]  (stopwords, boundaries, short numbers dropped)
//! ```
//!
//! The boundary-marked string keeps its casing and every word; compound and
//! bigram extraction work on it. The stripped token list feeds single-term
//! counting only.

use regex::{NoExpand, Regex};

use crate::error::{AutotagError, Result};
use crate::lexicon::Lexicon;

/// Anything that is neither a word character nor structural punctuation.
const NON_WORD_PATTERN: &str = r"[^A-Za-z0-9_.!?:;\n\r\f\t]+";

/// Runs of sentence-terminating or structural punctuation with surrounding spaces.
const STRUCTURAL_PATTERN: &str = r"(?: *[.!?:;\n\r\f\t] *)+";

/// Output of [`Preprocessor::process`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedText {
    /// Whitespace-normalised text with boundary tokens, original casing and
    /// stopwords intact. Padded with a leading and trailing space.
    pub boundary_marked: String,
    /// Tokens left after removing stopwords, boundary tokens and (optionally)
    /// short numbers.
    pub tokens: Vec<String>,
}

impl PreprocessedText {
    /// Split the boundary-marked text on single spaces.
    pub fn boundary_tokens(&self) -> impl Iterator<Item = &str> {
        self.boundary_marked.split(' ')
    }
}

/// Normalises raw text into a boundary-marked string and a token stream.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    non_word: Regex,
    structural: Regex,
    boundary: String,
    remove_short_numbers: bool,
}

impl Preprocessor {
    /// Create a preprocessor inserting `boundary` at structural breaks.
    pub fn new(boundary: &str, remove_short_numbers: bool) -> Result<Self> {
        if boundary.is_empty() || boundary.chars().any(char::is_whitespace) {
            return Err(AutotagError::invalid_config(format!(
                "boundary token must be non-empty and contain no whitespace, got {boundary:?}"
            )));
        }

        Ok(Preprocessor {
            non_word: compile(NON_WORD_PATTERN)?,
            structural: compile(STRUCTURAL_PATTERN)?,
            boundary: boundary.to_string(),
            remove_short_numbers,
        })
    }

    /// Check whether `token` is the boundary token.
    pub fn is_boundary(&self, token: &str) -> bool {
        token == self.boundary
    }

    /// Normalise `text`.
    pub fn process(&self, text: &str, lexicon: &Lexicon) -> PreprocessedText {
        let padded = format!(" {text} ");
        let collapsed = self.non_word.replace_all(&padded, " ");

        let marker = format!(" {} ", self.boundary);
        let boundary_marked = self
            .structural
            .replace_all(&collapsed, NoExpand(&marker))
            .into_owned();

        let tokens = boundary_marked
            .split(' ')
            .filter(|token| !token.is_empty())
            .filter(|token| !self.is_boundary(token))
            .filter(|token| !lexicon.is_stopword(token))
            .filter(|token| !(self.remove_short_numbers && is_short_number(token)))
            .map(str::to_string)
            .collect();

        PreprocessedText {
            boundary_marked,
            tokens,
        }
    }
}

/// One to three ASCII digits.
fn is_short_number(token: &str) -> bool {
    (1..=3).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| AutotagError::analysis(format!("Invalid regex pattern: {e}")))
}
