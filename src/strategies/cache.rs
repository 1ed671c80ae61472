//! The memo table for `MemoizedMinimaxSearch`.

use crate::interface::SearchNode;
use crate::tree::Tree;
use std::collections::HashMap;
use std::hash::Hash;

/// Fully scored subtrees, keyed by the canonical key of the position at their
/// root.
///
/// Entries are stored without an incoming move, since the same position can
/// be reached along different paths. Scores are relative to the initial
/// player of one search, so a cache must not outlive that search.
pub struct MoveCache<K, M> {
    entries: HashMap<K, Tree<SearchNode<M>>>,
}

impl<K: Hash + Eq, M> MoveCache<K, M> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MoveCache { entries: HashMap::with_capacity(capacity) }
    }

    pub fn get(&self, key: &K) -> Option<&Tree<SearchNode<M>>> {
        self.entries.get(key)
    }

    /// Remember `tree` as the scored subtree of the position `key`.
    pub fn insert(&mut self, key: K, tree: &Tree<SearchNode<M>>) {
        let root = SearchNode::new(None, tree.value().score);
        self.entries.insert(key, tree.relabel(root));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Hash + Eq, M> Default for MoveCache<K, M> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_insert_drops_incoming_move() {
    let mut cache = MoveCache::new();
    let tree = Tree::with_children(
        SearchNode::new(Some('a'), 1),
        vec![Tree::new(SearchNode::new(Some('b'), 1))],
    );
    cache.insert(7u32, &tree);
    let entry = cache.get(&7).unwrap();
    assert_eq!(*entry.value(), SearchNode::new(None, 1));
    assert_eq!(entry.children(), tree.children());
    assert_eq!(cache.get(&7), cache.get(&7));
    assert!(cache.get(&8).is_none());
    assert_eq!(cache.len(), 1);
}
