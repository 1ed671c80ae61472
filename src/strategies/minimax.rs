//! Exhaustive minimax.
//!
//! Builds the complete game tree below the queried position, scores every
//! terminal state as a win, tie or loss for the player who started the
//! search, and propagates the scores upward: a max wherever that player is to
//! move, a min wherever the opponent is. Exponential in the game length, so
//! only suitable for games small enough to solve outright.

use super::util::*;
use super::SearchStats;
use crate::error::SearchError;
use crate::interface::*;
use crate::tree::Tree;
use tracing::debug;

#[derive(Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
    root_score: Option<Score>,
}

impl MinimaxSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters from the last call to `suggest_move`.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score of the root in the last call to `suggest_move`.
    pub fn root_score(&self) -> Option<Score> {
        self.root_score
    }

    /// Build the full scored tree below `state`. `mv` is the move that led to
    /// `state` and labels the returned root.
    pub fn generate_move_tree<S: GameState>(
        &mut self, state: &S, initial_player: Player, mv: Option<S::M>,
    ) -> Result<Tree<SearchNode<S::M>>, SearchError> {
        self.stats.visited += 1;
        if state.is_over() {
            return Ok(Tree::new(SearchNode::new(mv, terminal_score(state, initial_player))));
        }
        self.stats.expanded += 1;
        let mut children = Vec::new();
        for m in state.possible_next_moves() {
            let next = child_state(state, &m)?;
            children.push(with_stack(|| self.generate_move_tree(&next, initial_player, Some(m)))?);
        }
        let score =
            minimax_score(state, initial_player, children.iter().map(|c| c.value().score))?;
        Ok(Tree::with_children(SearchNode::new(mv, score), children))
    }
}

impl<S: GameState> Strategy<S> for MinimaxSearch {
    fn suggest_move(&mut self, state: &S) -> Result<S::M, SearchError> {
        if state.is_over() {
            return Err(SearchError::TerminalState);
        }
        self.stats = SearchStats::default();
        self.root_score = None;
        let tree = self.generate_move_tree(state, state.next_player(), None)?;
        let m = best_child_move(&tree)?;
        self.root_score = Some(tree.value().score);
        debug!(
            strategy = "minimax",
            mv = ?m,
            score = tree.value().score,
            visited = self.stats.visited,
            "suggested move"
        );
        Ok(m)
    }
}
