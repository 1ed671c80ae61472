//! Game-tree search for two-player, zero-sum, perfect-information games.
//!
//! A game implements [`GameState`]; a [`Strategy`] searches every
//! continuation of a position down to the end of the game and suggests the
//! move with the best guaranteed outcome for the player to move. Three
//! strategies are provided: exhaustive minimax, minimax with early cutoffs,
//! and minimax with a memo of positions reached by transposition.

pub mod config;
pub mod error;
pub mod games;
pub mod interface;
pub mod strategies;
pub mod tree;
pub mod util;

pub use config::Algorithm;
pub use error::SearchError;
pub use interface::{
    CanonicalKey, GameState, Player, Score, SearchNode, Strategy, LOSS, TIE, WIN,
};
pub use strategies::cache::MoveCache;
pub use strategies::memoize::{MemoOptions, MemoizedMinimaxSearch};
pub use strategies::minimax::MinimaxSearch;
pub use strategies::prune::PrunedMinimaxSearch;
pub use strategies::SearchStats;
pub use tree::Tree;
