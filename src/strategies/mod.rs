//! Strategy implementations.
//!
//! All three strategies build an explicit tree of `SearchNode`s from the
//! queried position down to terminal states and score it by minimax relative
//! to the player who was to move at the root. They agree on every score and
//! differ only in how much of the tree they materialize and how often they
//! revisit a position.

pub mod cache;
pub mod memoize;
pub mod minimax;
pub mod prune;
mod util;

/// Counters describing the most recent search of a strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes placed in the search tree, the root included.
    pub visited: usize,
    /// Non-terminal positions whose moves were generated.
    pub expanded: usize,
    /// Times the pruned search stopped before the last sibling.
    pub cutoffs: usize,
    /// Positions answered from the memo cache.
    pub cache_hits: usize,
}
