//! Minimax with early cutoffs.
//!
//! Scores are restricted to win, tie and loss, so a node whose mover has
//! already found the best value available to them is decided: a win for the
//! initial player on their own turn, a loss for them on the opponent's turn.
//! The remaining siblings are skipped. Every node keeps the score exhaustive
//! minimax would give it, but a node that was cut off only carries the
//! children examined before the cutoff.

use super::util::*;
use super::SearchStats;
use crate::error::SearchError;
use crate::interface::*;
use crate::tree::Tree;
use tracing::{debug, trace};

#[derive(Default)]
pub struct PrunedMinimaxSearch {
    stats: SearchStats,
    root_score: Option<Score>,
}

impl PrunedMinimaxSearch {
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

    /// Build the scored tree below `state`, leaving out siblings that follow a
    /// decisive child.
    pub fn generate_move_tree<S: GameState>(
        &mut self, state: &S, initial_player: Player, mv: Option<S::M>,
    ) -> Result<Tree<SearchNode<S::M>>, SearchError> {
        self.stats.visited += 1;
        if state.is_over() {
            return Ok(Tree::new(SearchNode::new(mv, terminal_score(state, initial_player))));
        }
        self.stats.expanded += 1;
        let moves = state.possible_next_moves();
        let total = moves.len();
        let mut children = Vec::with_capacity(total);
        for m in moves {
            let next = child_state(state, &m)?;
            let child = with_stack(|| self.generate_move_tree(&next, initial_player, Some(m)))?;
            let score = child.value().score;
            children.push(child);
            if is_cutoff(state, initial_player, score) {
                self.stats.cutoffs += 1;
                trace!(score, examined = children.len(), total, "cutoff");
                return Ok(Tree::with_children(SearchNode::new(mv, score), children));
            }
        }
        let score =
            minimax_score(state, initial_player, children.iter().map(|c| c.value().score))?;
        Ok(Tree::with_children(SearchNode::new(mv, score), children))
    }
}

impl<S: GameState> Strategy<S> for PrunedMinimaxSearch {
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
            strategy = "prune",
            mv = ?m,
            score = tree.value().score,
            visited = self.stats.visited,
            cutoffs = self.stats.cutoffs,
            "suggested move"
        );
        Ok(m)
    }
}
