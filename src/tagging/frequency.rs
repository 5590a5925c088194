//! Deduplicating frequency list of candidates.

use ahash::AHashMap;

use crate::tagging::term::Term;

#[derive(Clone, Debug)]
struct Slot {
    seq: u64,
    term: Term,
}

/// Multiset of [`Term`]s keyed by identity.
///
/// Adding a term whose identity is already present increments the stored
/// frequency and replaces the stored term with the new one, so the last
/// variant's value and boost win while the count accumulates. Iteration
/// follows first-insertion order, which keeps results deterministic.
#[derive(Clone, Debug, Default)]
pub struct FrequencyList {
    terms: AHashMap<String, Slot>,
    next_seq: u64,
}

impl FrequencyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an occurrence of `term`.
    pub fn add(&mut self, mut term: Term) {
        match self.terms.get_mut(term.identity()) {
            Some(slot) => {
                term.set_frequency(slot.term.frequency() + 1);
                slot.term = term;
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.terms
                    .insert(term.identity().to_string(), Slot { seq, term });
            }
        }
    }

    pub fn get(&self, identity: &str) -> Option<&Term> {
        self.terms.get(identity).map(|slot| &slot.term)
    }

    pub fn get_mut(&mut self, identity: &str) -> Option<&mut Term> {
        self.terms.get_mut(identity).map(|slot| &mut slot.term)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.terms.contains_key(identity)
    }

    /// Remove and return the term stored under `identity`.
    pub fn remove(&mut self, identity: &str) -> Option<Term> {
        self.terms.remove(identity).map(|slot| slot.term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in first-insertion order.
    pub fn terms(&self) -> Vec<&Term> {
        let mut slots: Vec<&Slot> = self.terms.values().collect();
        slots.sort_unstable_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| &slot.term).collect()
    }

    /// Consume the list, yielding terms in first-insertion order.
    pub fn into_terms(self) -> Vec<Term> {
        let mut slots: Vec<Slot> = self.terms.into_values().collect();
        slots.sort_unstable_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| slot.term).collect()
    }
}
