//! Ordered result sets.

use crate::tagging::term::Term;

/// Ordered collection of terms forming a result set.
#[derive(Clone, Debug, Default)]
pub struct TagSet {
    tags: Vec<Term>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: Term) {
        self.tags.push(term);
    }

    pub fn extend<I: IntoIterator<Item = Term>>(&mut self, terms: I) {
        self.tags.extend(terms);
    }

    /// Sort by descending score. Equal scores keep their relative order.
    pub fn sort_by_score(&mut self) {
        self.tags.sort_by(|a, b| b.score().total_cmp(&a.score()));
    }

    /// Keep only the first `len` terms.
    pub fn truncate(&mut self, len: usize) {
        self.tags.truncate(len);
    }

    pub fn tags(&self) -> &[Term] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Join the tag values with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.tags
            .iter()
            .map(Term::value)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl IntoIterator for TagSet {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl FromIterator<Term> for TagSet {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        TagSet {
            tags: iter.into_iter().collect(),
        }
    }
}
