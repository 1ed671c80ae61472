use crate::error::SearchError;
use crate::interface::*;
use crate::tree::Tree;

// Searches recurse once per ply, so deep games would exhaust the caller's
// stack. Keep at least this much headroom, growing by a fresh segment of
// `STACK_SEGMENT` bytes whenever it runs out.
const RED_ZONE: usize = 128 * 1024;
const STACK_SEGMENT: usize = 4 * 1024 * 1024;

pub(super) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

// Score a finished game relative to the player who started the search.
pub(super) fn terminal_score<S: GameState>(state: &S, initial_player: Player) -> Score {
    if state.winner(initial_player) {
        WIN
    } else if state.winner(initial_player.opponent()) {
        LOSS
    } else {
        TIE
    }
}

// The initial player picks the best child, the opponent the worst.
pub(super) fn minimax_score<S, I>(
    state: &S, initial_player: Player, scores: I,
) -> Result<Score, SearchError>
where
    S: GameState,
    I: Iterator<Item = Score>,
{
    let best = if state.next_player() == initial_player { scores.max() } else { scores.min() };
    best.ok_or(SearchError::NoLegalMoves)
}

// Once a child reaches the best value the mover at `state` can hope for, the
// remaining siblings cannot change the aggregate.
pub(super) fn is_cutoff<S: GameState>(state: &S, initial_player: Player, score: Score) -> bool {
    if state.next_player() == initial_player {
        score == WIN
    } else {
        score == LOSS
    }
}

pub(super) fn child_state<S: GameState>(state: &S, m: &S::M) -> Result<S, SearchError> {
    state.apply_move(m).ok_or_else(|| SearchError::IllegalMove(format!("{:?}", m)))
}

// Read the move off the root's children: the first win, else the first tie,
// else the first loss.
pub(super) fn best_child_move<M: Clone>(root: &Tree<SearchNode<M>>) -> Result<M, SearchError> {
    [WIN, TIE, LOSS]
        .iter()
        .find_map(|&target| {
            root.children()
                .iter()
                .map(Tree::value)
                .find(|node| node.score == target)
                .and_then(|node| node.mv.clone())
        })
        .ok_or(SearchError::NoLegalMoves)
}
