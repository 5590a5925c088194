//! Second pass: frequency gating, cross-list arbitration and scoring.
//!
//! The candidate lists are drained one at a time in
//! [`Candidates::RESOLUTION_ORDER`]. While a list is drained, its terms may
//! delete or boost entries in the lists that have not been drained yet, which
//! is how a special term claims the plain word it duplicates, or a capitalised
//! phrase claims the bigram with the same words.

use log::trace;

use crate::tagging::context::AnalysisContext;
use crate::tagging::extractor::Candidates;
use crate::tagging::frequency::FrequencyList;
use crate::tagging::tag_set::TagSet;
use crate::tagging::term::{Term, TermType};

/// Turns the four candidate lists into one scored result set.
#[derive(Clone, Copy, Debug)]
pub struct ConflictResolver<'a> {
    ctx: AnalysisContext<'a>,
}

impl<'a> ConflictResolver<'a> {
    pub fn new(ctx: AnalysisContext<'a>) -> Self {
        ConflictResolver { ctx }
    }

    /// Resolve `candidates` into an unsorted set of admitted terms.
    pub fn resolve(&self, candidates: Candidates) -> TagSet {
        let mut lists = candidates.lists;
        let mut admitted = TagSet::new();

        for current in 0..lists.len() {
            let terms = std::mem::take(&mut lists[current]).into_terms();

            for mut term in terms {
                if !self.passes_frequency_gate(&term) {
                    continue;
                }

                let ignored = match term.term_type() {
                    TermType::Special => self.arbitrate_special(&term, &mut lists),
                    TermType::CapitalizedCompound => self.arbitrate_capitalized(&term, &mut lists),
                    _ => false,
                };
                if ignored {
                    trace!("'{}' ({}) ignored in favour of another variant", term, term.term_type());
                    continue;
                }

                self.apply_boosts(&mut term);

                if self.ctx.config.lowercase {
                    let lowered = term.value().to_lowercase();
                    term.set_value(lowered);
                }

                if term.score() > self.ctx.config.score_cutoff {
                    admitted.add(term);
                }
            }
        }

        admitted
    }

    fn passes_frequency_gate(&self, term: &Term) -> bool {
        term.frequency() > self.ctx.config.frequency_cutoff
            || term.ignore_frequency_cutoff()
            || self.ctx.is_whitelisted(term.value())
    }

    /// Compare a special term with its namesakes in every other list. A
    /// strictly higher scoring namesake wins and the special term is dropped;
    /// otherwise the namesake is deleted. Returns whether the term is dropped.
    fn arbitrate_special(&self, term: &Term, lists: &mut [FrequencyList; 4]) -> bool {
        let mut ignored = false;

        for (i, list) in lists.iter_mut().enumerate() {
            if i == Candidates::SPECIAL {
                continue;
            }

            let mut key = term.identity().to_string();
            if i == Candidates::SINGLES && !list.contains(&key) {
                key = self.ctx.root(&key);
            }

            let Some(other) = list.get(&key) else {
                continue;
            };

            if other.score() > term.score() {
                trace!("special '{}' loses to '{}' ({})", term, other, other.term_type());
                ignored = true;
            } else {
                trace!("special '{}' absorbs '{}' ({})", term, other, other.term_type());
                list.remove(&key);
            }
        }

        ignored
    }

    /// Compare a capitalised phrase with the same phrase counted as a bigram,
    /// and with the single word it may have collapsed to. Returns whether the
    /// phrase is dropped.
    fn arbitrate_capitalized(&self, term: &Term, lists: &mut [FrequencyList; 4]) -> bool {
        let boost = self.ctx.config.boosts.capitalization;
        let identity = term.identity();
        let mut ignored = false;

        // Bigrams count every casing, so more bigrams than capitalised
        // variants means the phrase was only capitalised somewhere like a title.
        let bigrams = &mut lists[Candidates::BIGRAMS];
        match bigrams.get(identity).map(|b| b.frequency() > term.frequency()) {
            Some(true) => {
                if let Some(bigram) = bigrams.get_mut(identity) {
                    bigram.add_boost(boost);
                }
                trace!("capitalised '{term}' yields to its bigram");
                ignored = true;
            }
            Some(false) => {
                trace!("capitalised '{term}' absorbs its bigram");
                bigrams.remove(identity);
            }
            None => {}
        }

        // A phrase that lost its leading stopword may be a single word, and
        // single words are keyed by their root.
        let single_key = if identity.contains(' ') {
            identity.to_string()
        } else {
            self.ctx.root(identity)
        };
        let singles = &mut lists[Candidates::SINGLES];
        match singles.get(&single_key).map(|s| s.score() > term.score()) {
            Some(true) => {
                if let Some(single) = singles.get_mut(&single_key) {
                    single.add_boost(boost);
                }
                trace!("capitalised '{term}' yields to its single term");
                ignored = true;
            }
            Some(false) => {
                trace!("capitalised '{term}' absorbs its single term");
                singles.remove(&single_key);
            }
            None => {}
        }

        ignored
    }

    /// Whitelist boost first, then capitalisation boosts for single words.
    fn apply_boosts(&self, term: &mut Term) {
        let boosts = &self.ctx.config.boosts;

        if self.ctx.is_whitelisted(term.value()) {
            term.add_boost(boosts.whitelist);
        }

        if !term.is_compound() {
            if starts_uppercase(term.value()) {
                term.add_boost(boosts.capitalization);
            }
            if is_all_caps(term.value()) {
                term.add_boost(boosts.capitalization);
            }
        }
    }
}

fn starts_uppercase(value: &str) -> bool {
    value.chars().next().is_some_and(char::is_uppercase)
}

fn is_all_caps(value: &str) -> bool {
    value.chars().any(char::is_uppercase) && !value.chars().any(char::is_lowercase)
}
