//! Minimax with a memo of solved positions.
//!
//! Games with transpositions reach the same position along many move orders.
//! This search keys every expanded position by its canonical key and reuses
//! the scored subtree the next time the position comes up, so each distinct
//! position is expanded once per search. The cache lives for a single
//! `suggest_move` call.
//!
//! A reused subtree is relabeled with the move of the path that reached it
//! this time; its children are shared with the cached copy.

use super::cache::MoveCache;
use super::util::*;
use super::SearchStats;
use crate::error::SearchError;
use crate::interface::*;
use crate::tree::Tree;
use tracing::{debug, trace};

/// Options to use for the memoized search.
#[derive(Clone, Copy, Debug)]
pub struct MemoOptions {
    cache_capacity: usize,
}

impl MemoOptions {
    pub fn new() -> Self {
        MemoOptions { cache_capacity: 1024 }
    }

    /// How many positions the cache has room for before it first grows.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }
}

impl Default for MemoOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct MemoizedMinimaxSearch {
    opts: MemoOptions,
    stats: SearchStats,
    root_score: Option<Score>,
}

impl MemoizedMinimaxSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: MemoOptions) -> Self {
        MemoizedMinimaxSearch { opts, ..Self::default() }
    }

    /// Counters from the last call to `suggest_move`.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score of the root in the last call to `suggest_move`.
    pub fn root_score(&self) -> Option<Score> {
        self.root_score
    }

    /// Build the scored tree below `state`, consulting and filling `cache`.
    ///
    /// `cache` must only ever be used with a single `initial_player`.
    pub fn generate_move_tree<S>(
        &mut self, state: &S, initial_player: Player, cache: &mut MoveCache<S::Key, S::M>,
        mv: Option<S::M>,
    ) -> Result<Tree<SearchNode<S::M>>, SearchError>
    where
        S: GameState + CanonicalKey,
    {
        self.stats.visited += 1;
        if state.is_over() {
            return Ok(Tree::new(SearchNode::new(mv, terminal_score(state, initial_player))));
        }
        let key = state.canonical_key();
        if let Some(hit) = cache.get(&key) {
            self.stats.cache_hits += 1;
            trace!(score = hit.value().score, "cache hit");
            return Ok(hit.relabel(SearchNode::new(mv, hit.value().score)));
        }
        self.stats.expanded += 1;
        let mut children = Vec::new();
        for m in state.possible_next_moves() {
            let next = child_state(state, &m)?;
            let child = with_stack(|| {
                self.generate_move_tree(&next, initial_player, &mut *cache, Some(m))
            })?;
            children.push(child);
        }
        let score =
            minimax_score(state, initial_player, children.iter().map(|c| c.value().score))?;
        let tree = Tree::with_children(SearchNode::new(mv, score), children);
        cache.insert(key, &tree);
        Ok(tree)
    }
}

impl<S: GameState + CanonicalKey> Strategy<S> for MemoizedMinimaxSearch {
    fn suggest_move(&mut self, state: &S) -> Result<S::M, SearchError> {
        if state.is_over() {
            return Err(SearchError::TerminalState);
        }
        self.stats = SearchStats::default();
        self.root_score = None;
        let mut cache = MoveCache::with_capacity(self.opts.cache_capacity);
        let tree = self.generate_move_tree(state, state.next_player(), &mut cache, None)?;
        let m = best_child_move(&tree)?;
        self.root_score = Some(tree.value().score);
        debug!(
            strategy = "memoize",
            mv = ?m,
            score = tree.value().score,
            visited = self.stats.visited,
            cache_hits = self.stats.cache_hits,
            positions = cache.len(),
            "suggested move"
        );
        Ok(m)
    }
}
