//! Persistent character trie.

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One prefix position of an immutable, character-keyed prefix tree.
///
/// Nodes are never mutated once built. [`TrieNode::inserting`] returns a new
/// node that shares every untouched child subtree (and, off the terminal
/// node, the item set) with `self` through `Arc`, so older roots stay valid
/// and can be read concurrently.
#[derive(Debug)]
pub struct TrieNode<T> {
    /// Items whose keyword ends exactly here.
    items: Arc<FxHashSet<T>>,
    children: Arc<BTreeMap<char, Arc<TrieNode<T>>>>,
}

impl<T> Clone for TrieNode<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            children: Arc::clone(&self.children),
        }
    }
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(FxHashSet::default()),
            children: Arc::new(BTreeMap::new()),
        }
    }
}

impl<T> TrieNode<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items attached directly to this node, not to its descendants.
    pub fn items(&self) -> &FxHashSet<T> {
        &self.items
    }

    pub fn child(&self, token: char) -> Option<&Arc<TrieNode<T>>> {
        self.children.get(&token)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &Arc<TrieNode<T>>)> {
        self.children.iter().map(|(token, child)| (*token, child))
    }

    /// Returns true if `other` is the same allocation as one of this node's
    /// children, i.e. the subtree is shared rather than copied.
    pub fn shares_child_with(&self, other: &TrieNode<T>, token: char) -> bool {
        match (self.child(token), other.child(token)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> TrieNode<T>
where
    T: Clone + Eq + std::hash::Hash,
{
    /// Returns a new node with `item` registered at the end of `tokens`.
    ///
    /// An empty token slice attaches the item to this node.
    pub fn inserting(&self, item: T, tokens: &[char]) -> TrieNode<T> {
        let Some((&token, rest)) = tokens.split_first() else {
            let mut items = (*self.items).clone();
            items.insert(item);
            return TrieNode {
                items: Arc::new(items),
                children: Arc::clone(&self.children),
            };
        };

        let updated_child = match self.children.get(&token) {
            Some(existing) => existing.inserting(item, rest),
            None => TrieNode::new().inserting(item, rest),
        };

        let mut children = (*self.children).clone();
        children.insert(token, Arc::new(updated_child));

        TrieNode {
            items: Arc::clone(&self.items),
            children: Arc::new(children),
        }
    }

    /// Returns every item in the subtree reached by following `tokens`.
    ///
    /// Returns an empty set as soon as a token has no child.
    pub fn searching(&self, tokens: &[char]) -> FxHashSet<T> {
        match tokens.split_first() {
            None => self.all_items(),
            Some((token, rest)) => self
                .children
                .get(token)
                .map(|child| child.searching(rest))
                .unwrap_or_default(),
        }
    }

    /// Union of the items attached to this node and all of its descendants.
    pub fn all_items(&self) -> FxHashSet<T> {
        let mut out = FxHashSet::default();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut FxHashSet<T>) {
        out.extend(self.items.iter().cloned());
        for child in self.children.values() {
            child.collect_into(out);
        }
    }
}
