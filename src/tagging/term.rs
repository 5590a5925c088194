//! Candidate terms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a candidate by the heuristic that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermType {
    /// A single word from the stopword-free token stream.
    Single,
    /// A two-to-four word capitalised phrase such as "New York Times".
    CapitalizedCompound,
    /// Two adjacent non-stopwords.
    SimpleBigram,
    /// An abbreviation, acronym or CamelCase word.
    Special,
    /// A configured tag appended to every result.
    TagConstant,
}

impl TermType {
    /// Every type except [`TermType::Single`] is a compound.
    pub fn is_compound(self) -> bool {
        self != TermType::Single
    }

    /// Extraction and single-word candidates are frequency gated unless this is true.
    pub fn ignores_frequency_cutoff(self) -> bool {
        matches!(self, TermType::Special | TermType::CapitalizedCompound)
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermType::Single => "single",
            TermType::CapitalizedCompound => "capitalized_compound",
            TermType::SimpleBigram => "simple_bigram",
            TermType::Special => "special",
            TermType::TagConstant => "tag_constant",
        };
        f.write_str(name)
    }
}

/// A candidate tag.
///
/// The score is always derived as `frequency * boost`; boosts only ever
/// compose multiplicatively.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    value: String,
    identity: String,
    term_type: TermType,
    frequency: u32,
    boost: f64,
    ignore_frequency_cutoff: bool,
}

impl Term {
    /// Create a candidate seen once with a boost of 1.0.
    ///
    /// `identity` is the dedup key: the lowercased (and for single words,
    /// stemmed) form of `value`.
    pub fn new<V, I>(value: V, identity: I, term_type: TermType) -> Self
    where
        V: Into<String>,
        I: Into<String>,
    {
        Term {
            value: value.into(),
            identity: identity.into(),
            term_type,
            frequency: 1,
            boost: 1.0,
            ignore_frequency_cutoff: term_type.ignores_frequency_cutoff(),
        }
    }

    /// Set the initial boost.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    /// Display value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the display value. The identity is left unchanged.
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
    }

    /// Dedup key.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn term_type(&self) -> TermType {
        self.term_type
    }

    pub fn is_compound(&self) -> bool {
        self.term_type.is_compound()
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub(crate) fn set_frequency(&mut self, frequency: u32) {
        self.frequency = frequency;
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }

    /// Multiply the boost by `factor`.
    pub fn add_boost(&mut self, factor: f64) {
        self.boost *= factor;
    }

    pub fn ignore_frequency_cutoff(&self) -> bool {
        self.ignore_frequency_cutoff
    }

    /// `frequency * boost`.
    pub fn score(&self) -> f64 {
        f64::from(self.frequency) * self.boost
    }

    /// Individual lowercase words of the value.
    pub fn words(&self) -> Vec<String> {
        self.value
            .to_lowercase()
            .split(' ')
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
