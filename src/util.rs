//! Utility functions for testing.

use crate::error::SearchError;
use crate::interface::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Play a complete game from `state` with `s1` moving for the player to move
/// and `s2` for the other.
///
/// Returns the winning player, or `None` if the game ends in a tie.
pub fn battle_royale<S, S1, S2>(
    state: &S, s1: &mut S1, s2: &mut S2,
) -> Result<Option<Player>, SearchError>
where
    S: GameState + Clone,
    S1: Strategy<S> + ?Sized,
    S2: Strategy<S> + ?Sized,
{
    let first = state.next_player();
    let mut state = state.clone();
    while !state.is_over() {
        let m = if state.next_player() == first {
            s1.suggest_move(&state)?
        } else {
            s2.suggest_move(&state)?
        };
        state = state
            .apply_move(&m)
            .ok_or_else(|| SearchError::IllegalMove(format!("{:?}", m)))?;
    }
    Ok([first, first.opponent()].iter().copied().find(|&p| state.winner(p)))
}

/// Play up to `plies` random moves from `state`, never stepping into a
/// terminal state. Returns the last non-terminal state reached.
pub fn random_state<S, R>(state: &S, plies: usize, rng: &mut R) -> S
where
    S: GameState + Clone,
    R: Rng + ?Sized,
{
    let mut state = state.clone();
    for _ in 0..plies {
        let mut moves = state.possible_next_moves();
        moves.shuffle(rng);
        // Only step onto a move that keeps the game going.
        let next = moves.iter().filter_map(|m| state.apply_move(m)).find(|next| !next.is_over());
        match next {
            Some(next) => state = next,
            None => break,
        }
    }
    state
}
