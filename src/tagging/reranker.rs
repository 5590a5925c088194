//! Third pass: down-weight terms already covered by a stronger phrase.

use ahash::AHashSet;
use log::trace;

use crate::tagging::context::AnalysisContext;
use crate::tagging::tag_set::TagSet;
use crate::tagging::term::{Term, TermType};

/// Reranks resolved terms, truncates to the requested size and appends the
/// configured tag constants.
#[derive(Clone, Copy, Debug)]
pub struct Reranker<'a> {
    ctx: AnalysisContext<'a>,
}

impl<'a> Reranker<'a> {
    pub fn new(ctx: AnalysisContext<'a>) -> Self {
        Reranker { ctx }
    }

    /// Walk the terms from highest to lowest score. A capitalised phrase
    /// claims its word pairs and word roots; a bigram claimed by a higher
    /// phrase is down-weighted and in turn claims its own roots; a single word
    /// whose root was claimed is down-weighted.
    pub fn rerank(&self, mut resolved: TagSet) -> TagSet {
        resolved.sort_by_score();

        let boosts = &self.ctx.config.boosts;
        let mut claimed_bigrams: AHashSet<String> = AHashSet::new();
        let mut claimed_tokens: AHashSet<String> = AHashSet::new();
        let mut reranked = TagSet::new();

        for mut term in resolved {
            match term.term_type() {
                TermType::CapitalizedCompound => {
                    let words = term.words();
                    for pair in words.windows(2) {
                        claimed_bigrams.insert(format!("{} {}", pair[0], pair[1]));
                    }
                    for word in &words {
                        claimed_tokens.insert(self.ctx.root(word));
                    }
                }
                TermType::SimpleBigram => {
                    if claimed_bigrams.contains(&term.value().to_lowercase()) {
                        trace!("bigram '{term}' already covered by a capitalised phrase");
                        term.add_boost(boosts.bigram_already_detected);
                    }
                    for word in term.words() {
                        claimed_tokens.insert(self.ctx.root(&word));
                    }
                }
                TermType::Single => {
                    if claimed_tokens.contains(&self.ctx.root(term.value())) {
                        trace!("single '{term}' already covered by a longer tag");
                        term.add_boost(boosts.term_from_compound);
                    }
                }
                TermType::Special | TermType::TagConstant => {}
            }
            reranked.add(term);
        }

        reranked.sort_by_score();
        reranked
    }

    /// Rerank, keep the best `max_tags` terms and append the tag constants.
    pub fn finish(&self, resolved: TagSet, max_tags: usize) -> TagSet {
        let mut tags = self.rerank(resolved);
        tags.truncate(max_tags);

        if self.ctx.config.append_tag_constants {
            tags.extend(self.ctx.lexicon.tag_constants().iter().map(|constant| {
                Term::new(constant.as_str(), constant.to_lowercase(), TermType::TagConstant)
            }));
        }

        tags
    }
}
