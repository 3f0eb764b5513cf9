//! Build-once inverted index from tokens to corpus positions.

use ahash::{AHashMap, AHashSet};
use std::time::Instant;

use super::tokenize::tokenize_unique;

/// Position of an item in the corpus it was indexed from.
pub type ItemId = usize;

/// Items that can describe their own searchable text.
///
/// Absent fields are `None` and are skipped during indexing, as are empty strings.
pub trait Searchable {
    fn searchable_text(&self) -> Vec<Option<&str>>;
}

/// Immutable inverted index over a fixed corpus.
///
/// The corpus vector owns every item; postings refer to items by [`ItemId`] only.
/// Nothing can be added or removed after construction. To reflect a changed corpus,
/// build a new index.
#[derive(Debug, Clone)]
pub struct SearchIndex<T> {
    /// Items in the order they were supplied
    pub(super) corpus: Vec<T>,
    /// Map from token to the set of items containing it; never holds an empty set
    pub(super) postings: AHashMap<Box<str>, AHashSet<ItemId>>,
    /// Every key of `postings`, sorted, for prefix range lookups
    pub(super) terms: Vec<Box<str>>,
}

impl<T> SearchIndex<T> {
    /// Builds the index over `items`, asking `extract` for each item's searchable text.
    ///
    /// ```
    /// use workout_catalog_search::search::SearchIndex;
    ///
    /// let index = SearchIndex::new(vec![("Pull Up", Some("Chin Up"))], |(name, alt)| {
    ///     vec![Some(*name), *alt]
    /// });
    /// assert_eq!(index.search("chin").len(), 1);
    /// ```
    pub fn new<F>(items: Vec<T>, extract: F) -> Self
    where
        F: Fn(&T) -> Vec<Option<&str>>,
    {
        let start = Instant::now();
        let mut postings: AHashMap<Box<str>, AHashSet<ItemId>> = AHashMap::new();

        for (id, item) in items.iter().enumerate() {
            let mut item_tokens: AHashSet<String> = AHashSet::new();
            for text in extract(item).into_iter().flatten() {
                if text.is_empty() {
                    continue;
                }
                item_tokens.extend(tokenize_unique(text));
            }

            for token in item_tokens {
                postings.entry(token.into_boxed_str()).or_default().insert(id);
            }
        }

        let mut terms: Vec<Box<str>> = postings.keys().cloned().collect();
        terms.sort_unstable();

        tracing::debug!(
            "Built search index: {} items, {} unique terms in {:?}",
            items.len(),
            terms.len(),
            start.elapsed()
        );

        Self {
            corpus: items,
            postings,
            terms,
        }
    }

    /// All indexed items in their original order.
    pub fn corpus(&self) -> &[T] {
        &self.corpus
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.corpus.get(id)
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Number of distinct tokens in the index
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Whether `term` is an exact key of the index. Not normalized; pass a lowercase token.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Sorted slice of every indexed term starting with `prefix`.
    pub(super) fn terms_with_prefix(&self, prefix: &str) -> &[Box<str>] {
        let start = self.terms.partition_point(|term| &**term < prefix);
        let len = self.terms[start..]
            .iter()
            .take_while(|term| term.starts_with(prefix))
            .count();
        &self.terms[start..start + len]
    }
}

impl<T: Searchable> SearchIndex<T> {
    /// Builds the index using each item's own [`Searchable`] text.
    pub fn from_searchable(items: Vec<T>) -> Self {
        Self::new(items, T::searchable_text)
    }
}

impl<T: Searchable> FromIterator<T> for SearchIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_searchable(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    struct Named {
        name: &'static str,
        alt: Option<&'static str>,
    }

    impl Searchable for Named {
        fn searchable_text(&self) -> Vec<Option<&str>> {
            vec![Some(self.name), self.alt]
        }
    }

    fn named(name: &'static str, alt: Option<&'static str>) -> Named {
        Named { name, alt }
    }

    #[test]
    fn test_empty_corpus_builds_empty_index() {
        let index = SearchIndex::<Named>::from_searchable(vec![]);
        check!(index.is_empty());
        check!(index.term_count() == 0);
    }

    #[test]
    fn test_postings_cover_every_field() {
        let index = SearchIndex::from_searchable(vec![
            named("Pull Up", Some("Chin Up")),
            named("Push Up", None),
        ]);

        check!(index.postings["up"].len() == 2);
        check!(index.postings["chin"].iter().copied().collect::<Vec<_>>() == [0]);
        check!(index.contains_term("pull"));
        check!(!index.contains_term("Pull"));
        check!(index.term_count() == 4);
    }

    #[test]
    fn test_token_repeated_across_fields_posts_once() {
        let index = SearchIndex::from_searchable(vec![named("Row Row", Some("Cable Row"))]);
        check!(index.postings["row"].len() == 1);
    }

    #[test]
    fn test_absent_and_empty_fields_are_skipped() {
        let index = SearchIndex::new(vec![1_u8, 2], |_| vec![None, Some(""), Some("  ")]);
        check!(index.len() == 2);
        check!(index.term_count() == 0);
    }

    #[test]
    fn test_no_posting_set_is_empty() {
        let index = SearchIndex::from_searchable(vec![
            named("Romanian Deadlift", None),
            named("a b", Some("-")),
        ]);
        check!(index.postings.values().all(|items| !items.is_empty()));
    }

    #[test]
    fn test_terms_are_sorted_and_match_postings() {
        let index: SearchIndex<Named> = [named("Zercher Squat", None), named("Air Squat", None)]
            .into_iter()
            .collect();

        check!(index.terms.windows(2).all(|pair| pair[0] < pair[1]));
        check!(index.terms.len() == index.postings.len());
    }

    #[test]
    fn test_terms_with_prefix_range() {
        let index = SearchIndex::from_searchable(vec![
            named("Deadlift", None),
            named("Deadbug", None),
            named("Decline Press", None),
            named("Dip", None),
        ]);

        check!(index.terms_with_prefix("dead").len() == 2);
        check!(index.terms_with_prefix("de").len() == 3);
        check!(index.terms_with_prefix("deadlifts").is_empty());
        check!(index.terms_with_prefix("zz").is_empty());
    }

    #[test]
    fn test_corpus_order_preserved() {
        let index = SearchIndex::new(vec!["b", "a", "c"], |s| vec![Some(*s)]);
        check!(index.corpus() == ["b", "a", "c"]);
        check!(index.get(1) == Some(&"a"));
        check!(index.get(3).is_none());
    }
}
