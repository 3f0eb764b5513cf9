//! Multi-word AND queries with exact-or-prefix token resolution.

use ahash::AHashSet;
use std::borrow::Cow;

use super::index::{ItemId, SearchIndex};
use super::tokenize::tokenize_unique;

/// A page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHits<'a, T> {
    /// Matching items in corpus order, at most `limit` of them
    pub items: Vec<&'a T>,
    /// Number of matching items before the limit was applied
    pub total: usize,
}

impl<T> SearchIndex<T> {
    /// Returns every item matching all words of `query`, in corpus order.
    ///
    /// A query with no usable tokens (empty, whitespace, punctuation, single letters)
    /// matches the whole corpus.
    pub fn search(&self, query: &str) -> Vec<&T> {
        self.search_ids(query)
            .into_iter()
            .map(|id| &self.corpus[id])
            .collect()
    }

    /// Like [`search`](Self::search), but returns at most `limit` items plus the total count.
    pub fn search_limited(&self, query: &str, limit: usize) -> SearchHits<'_, T> {
        let ids = self.search_ids(query);
        SearchHits {
            total: ids.len(),
            items: ids
                .into_iter()
                .take(limit)
                .map(|id| &self.corpus[id])
                .collect(),
        }
    }

    /// Returns the corpus positions of every item matching all words of `query`, ascending.
    pub fn search_ids(&self, query: &str) -> Vec<ItemId> {
        let tokens = tokenize_unique(query);
        if tokens.is_empty() {
            return (0..self.corpus.len()).collect();
        }

        let mut candidates = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let items = self.resolve_token(token);
            if items.is_empty() {
                tracing::trace!("No match for query token '{}'", token);
                return vec![];
            }
            candidates.push(items);
        }

        let mut ids = intersect(candidates);
        ids.sort_unstable();

        tracing::trace!(
            "Query '{}': {} tokens, {} hits",
            query,
            tokens.len(),
            ids.len()
        );

        ids
    }

    /// Items for one query token: the exact posting if the token is indexed, otherwise the
    /// union of postings of every indexed token that starts with it.
    ///
    /// An exact key takes precedence over longer tokens. With "Dead Hang" and "Romanian
    /// Deadlift" indexed, "dead" resolves to the "dead" posting alone and does not reach
    /// "deadlift"; an item is reachable by a partial word only when that partial is not itself
    /// an indexed token.
    fn resolve_token(&self, token: &str) -> Cow<'_, AHashSet<ItemId>> {
        if let Some(items) = self.postings.get(token) {
            return Cow::Borrowed(items);
        }

        let mut union = AHashSet::new();
        for term in self.terms_with_prefix(token) {
            if let Some(items) = self.postings.get(term) {
                union.extend(items.iter().copied());
            }
        }
        Cow::Owned(union)
    }
}

/// Items present in every set. Walks the smallest set and checks the others.
fn intersect(mut sets: Vec<Cow<'_, AHashSet<ItemId>>>) -> Vec<ItemId> {
    sets.sort_by_key(|set| set.len());
    let Some((smallest, rest)) = sets.split_first() else {
        return vec![];
    };

    smallest
        .iter()
        .copied()
        .filter(|id| rest.iter().all(|set| set.contains(id)))
        .collect()
}
