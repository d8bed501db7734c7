//! Persistent autocomplete index.

use crate::config::QueryOptions;
use crate::query::AutoCompleteQuery;
use crate::results::rank;
use crate::tokenizer::{keyword_matches, last_segment, tokenize};
use crate::trie::TrieNode;
use sponge_core::types::Searchable;
use std::sync::Arc;

/// Number of suggestions returned when the caller doesn't pick a limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Prefix index over items found by one or more keywords.
///
/// Every update returns a new index; the receiver and anything cloned from it
/// keep answering queries exactly as before. Unchanged subtrees are shared
/// between versions, so cloning and inserting are cheap and old snapshots can
/// be read from other threads without locking.
#[derive(Debug)]
pub struct AutoComplete<T> {
    root: Arc<TrieNode<T>>,
}

impl<T> Clone for AutoComplete<T> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl<T> Default for AutoComplete<T> {
    fn default() -> Self {
        Self {
            root: Arc::new(TrieNode::new()),
        }
    }
}

/// Create operations.
impl<T: Searchable> AutoComplete<T> {
    /// Builds an index from `items`, registering each under all of its keywords.
    ///
    /// Items without keywords are dropped. The resulting content does not
    /// depend on the order of `items`.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut root = TrieNode::new();
        let mut seen = 0usize;
        for item in items {
            root = insert_keywords(&root, &item);
            seen += 1;
        }

        tracing::debug!(target: "sponge::search", items = seen, "autocomplete index built");

        Self {
            root: Arc::new(root),
        }
    }

    /// The current root node.
    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }
}

impl<T: Searchable> FromIterator<T> for AutoComplete<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Insert operations. None of these modify `self`.
impl<T: Searchable> AutoComplete<T> {
    /// Returns a new index that also contains `item`.
    pub fn inserting(&self, item: T) -> Self {
        Self {
            root: Arc::new(insert_keywords(&self.root, &item)),
        }
    }

    /// Returns a new index that also contains every item of `items`.
    pub fn inserting_all(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut root = TrieNode::clone(&self.root);
        let mut seen = 0usize;
        for item in items {
            root = insert_keywords(&root, &item);
            seen += 1;
        }

        tracing::debug!(target: "sponge::search", items = seen, "batch inserted into autocomplete index");

        Self {
            root: Arc::new(root),
        }
    }
}

/// Search operations.
impl<T: Searchable> AutoComplete<T> {
    /// Completes the last word of `query`, case-insensitively.
    ///
    /// Earlier words are ignored. Results are ordered by the length of each
    /// item's shortest keyword, then by its smallest keyword. An empty or
    /// all-whitespace query returns nothing.
    pub fn search(&self, query: &str) -> Vec<T> {
        self.matching(query, &QueryOptions::default())
    }

    /// [`search`](Self::search) truncated to the best `limit` results.
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<T> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// Runs a prepared query, honoring its matching options and result cap.
    pub fn search_with(&self, query: &AutoCompleteQuery) -> Vec<T> {
        let mut results = self.matching(&query.terms.join(" "), &query.options);

        if let Some(max_results) = query.options.max_results {
            results.truncate(max_results);
        }

        results
    }

    fn matching(&self, query: &str, options: &QueryOptions) -> Vec<T> {
        let Some(segment) = last_segment(query) else {
            return Vec::new();
        };

        let candidates = self.root.searching(&tokenize(segment));
        let candidate_count = candidates.len();

        // Items are attached under every keyword; only one of them needs to match.
        let matched = candidates.into_iter().filter(|item| {
            item.keywords()
                .iter()
                .any(|keyword| keyword_matches(keyword, segment, options))
        });
        let results = rank(matched);

        tracing::trace!(
            target: "sponge::search",
            segment,
            candidates = candidate_count,
            results = results.len(),
            "autocomplete query"
        );

        results
    }
}

/// Transform operations. Each rebuilds a fresh index.
impl<T: Searchable> AutoComplete<T> {
    /// Returns an index of the items satisfying `predicate`.
    pub fn filtered(&self, predicate: impl Fn(&T) -> bool) -> Self {
        let kept: Vec<T> = self
            .root
            .all_items()
            .into_iter()
            .filter(|item| predicate(item))
            .collect();

        tracing::debug!(target: "sponge::search", kept = kept.len(), "filtered autocomplete index");
        Self::new(kept)
    }

    /// Returns an index of the transformed items, skipping those mapped to `None`.
    pub fn compact_mapped<U: Searchable>(
        &self,
        transform: impl FnMut(T) -> Option<U>,
    ) -> AutoComplete<U> {
        let mapped: Vec<U> = self
            .root
            .all_items()
            .into_iter()
            .filter_map(transform)
            .collect();

        tracing::debug!(target: "sponge::search", kept = mapped.len(), "mapped autocomplete index");
        AutoComplete::new(mapped)
    }
}

/// Read operations.
impl<T: Searchable> AutoComplete<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.root.all_items().contains(item)
    }

    /// Every distinct item in the index, in no particular order.
    pub fn all_items(&self) -> Vec<T> {
        self.root.all_items().into_iter().collect()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.root.all_items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.items().is_empty() && self.root.children().next().is_none()
    }
}

fn insert_keywords<T: Searchable>(root: &TrieNode<T>, item: &T) -> TrieNode<T> {
    item.keywords()
        .iter()
        .fold(root.clone(), |node, keyword| {
            node.inserting(item.clone(), &tokenize(keyword))
        })
}
