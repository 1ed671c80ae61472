//! The common structures and traits.

use crate::error::SearchError;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// The outcome of a position from the perspective of the player who was to
/// move when the search started.
pub type Score = i8;

/// The initial player can force a win.
pub const WIN: Score = 1;
/// Neither player can force a win.
pub const TIE: Score = 0;
/// The opponent can force a win.
pub const LOSS: Score = -1;

/// One of the two players of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            Player::One => write!(f, "p1"),
            Player::Two => write!(f, "p2"),
        }
    }
}

/// Defines the rules for a two-player, perfect-knowledge game.
///
/// A state knows whose turn it is, which moves are legal, and whether the
/// game has ended. States are immutable: applying a move produces a new state
/// in which the other player is to move.
pub trait GameState: Sized {
    /// The type of game moves. Strategies never look inside a move.
    type M: Clone + PartialEq + Debug;

    /// The player to move.
    fn next_player(&self) -> Player;

    /// Whether the game has ended, either by a win or because no moves remain.
    fn is_over(&self) -> bool;

    /// Generate the legal moves at this state, in a stable order. Empty iff
    /// the state admits no continuation.
    fn possible_next_moves(&self) -> Vec<Self::M>;

    /// Play `m` for the player to move. Returns `None` if the move is not
    /// legal here.
    fn apply_move(&self, m: &Self::M) -> Option<Self>;

    /// Whether `player` has achieved the winning condition. At most one
    /// player wins any state.
    fn winner(&self, player: Player) -> bool;
}

/// An optional trait for game states to expose a lookup key.
///
/// Strategies that cache things by game state require this. Two states must
/// produce equal keys iff they are the same position with the same player to
/// move.
pub trait CanonicalKey {
    type Key: Hash + Eq + Clone;

    fn canonical_key(&self) -> Self::Key;
}

/// The payload of each node in a search tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<M> {
    /// The move applied to the parent's state to reach this node. `None` at
    /// the root.
    pub mv: Option<M>,
    pub score: Score,
}

impl<M> SearchNode<M> {
    pub fn new(mv: Option<M>, score: Score) -> Self {
        SearchNode { mv, score }
    }
}

impl<M: Debug> Display for SearchNode<M> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.mv {
            Some(ref m) => write!(f, "({:?}, {})", m, self.score),
            None => write!(f, "(None, {})", self.score),
        }
    }
}

/// Defines a method of choosing a move for the current player.
pub trait Strategy<S: GameState> {
    /// Pick a move for the player to move at `state`.
    ///
    /// Fails with `SearchError::TerminalState` if the game is already over.
    fn suggest_move(&mut self, state: &S) -> Result<S::M, SearchError>;
}
