//! Subtract Square: players take turns removing a positive perfect square
//! number of counters from a shared pile. The player left to move with an
//! empty pile has lost.

use crate::interface::*;
use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubtractSquare {
    remaining: u32,
    to_move: Player,
}

impl SubtractSquare {
    pub fn new(first: Player, remaining: u32) -> Self {
        SubtractSquare { remaining, to_move: first }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

fn is_square(n: u32) -> bool {
    (1u32..).map_while(|k| k.checked_mul(k)).take_while(|&sq| sq <= n).any(|sq| sq == n)
}

/// Remove this many counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Subtract(pub u32);

impl Display for Subtract {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.0)
    }
}

impl GameState for SubtractSquare {
    type M = Subtract;

    fn next_player(&self) -> Player {
        self.to_move
    }

    fn is_over(&self) -> bool {
        self.remaining == 0
    }

    fn possible_next_moves(&self) -> Vec<Subtract> {
        (1u32..)
            .map_while(|k| k.checked_mul(k))
            .take_while(|&sq| sq <= self.remaining)
            .map(Subtract)
            .collect()
    }

    fn apply_move(&self, m: &Subtract) -> Option<Self> {
        if m.0 == 0 || m.0 > self.remaining || !is_square(m.0) {
            return None;
        }
        Some(SubtractSquare { remaining: self.remaining - m.0, to_move: self.to_move.opponent() })
    }

    fn winner(&self, player: Player) -> bool {
        // Whoever took the last counter won.
        self.remaining == 0 && player == self.to_move.opponent()
    }
}

impl CanonicalKey for SubtractSquare {
    type Key = (Player, u32);

    fn canonical_key(&self) -> Self::Key {
        (self.to_move, self.remaining)
    }
}

impl Display for SubtractSquare {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Next player: {}\nRemaining: {}", self.to_move, self.remaining)
    }
}

#[test]
fn test_moves() {
    let s = SubtractSquare::new(Player::One, 10);
    assert_eq!(s.possible_next_moves(), vec![Subtract(1), Subtract(4), Subtract(9)]);
    assert!(s.apply_move(&Subtract(3)).is_none());
    assert!(s.apply_move(&Subtract(16)).is_none());
    assert!(s.apply_move(&Subtract(0)).is_none());
    let t = s.apply_move(&Subtract(9)).unwrap();
    assert_eq!(t.remaining(), 1);
    assert_eq!(t.next_player(), Player::Two);
}

#[test]
fn test_empty_pile_is_a_loss_for_the_mover() {
    let s = SubtractSquare::new(Player::Two, 0);
    assert!(s.is_over());
    assert!(s.possible_next_moves().is_empty());
    assert!(s.winner(Player::One));
    assert!(!s.winner(Player::Two));
}

#[test]
fn test_key_tracks_mover() {
    let a = SubtractSquare::new(Player::One, 5);
    let b = SubtractSquare::new(Player::Two, 5);
    assert_ne!(a.canonical_key(), b.canonical_key());
    let c = SubtractSquare::new(Player::One, 6).apply_move(&Subtract(1)).unwrap();
    let d = SubtractSquare::new(Player::Two, 6).apply_move(&Subtract(1)).unwrap();
    assert_eq!(c.canonical_key(), b.canonical_key());
    assert_eq!(d.canonical_key(), a.canonical_key());
}
