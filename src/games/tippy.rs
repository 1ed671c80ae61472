//! Tippy, for use in tests.
//!
//! Players take turns placing a piece on an empty square of an n×n grid. The
//! first player to own a "tippy", a Z or S shaped group of four squares in
//! either orientation, wins. A full grid without a tippy is a tie.
//!
//! Squares are addressed as `(x, y)` with `x` the row and `y` the column, and
//! moves are generated in row-major order.

use crate::interface::*;
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Square {
    Empty,
    X,
    O,
}

impl Default for Square {
    fn default() -> Square {
        Square::Empty
    }
}

impl From<Player> for Square {
    fn from(p: Player) -> Square {
        match p {
            Player::One => Square::X,
            Player::Two => Square::O,
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'x',
                Square::O => 'o',
            }
        )
    }
}

// Offsets of the four squares of each tippy shape anchored at a square, for
// every combination of directions.
const SHAPES: [[(isize, isize); 4]; 8] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (1, -1), (2, -1)],
    [(0, 0), (-1, 0), (-1, 1), (-2, 1)],
    [(0, 0), (-1, 0), (-1, -1), (-2, -1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 0), (0, -1), (1, -1), (1, -2)],
    [(0, 0), (0, 1), (-1, 1), (-1, 2)],
    [(0, 0), (0, -1), (-1, -1), (-1, -2)],
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tippy {
    size: usize,
    squares: Vec<Square>,
    to_move: Player,
    over: bool,
}

impl Tippy {
    /// An empty `size`×`size` grid with `first` to move.
    pub fn new(first: Player, size: usize) -> Self {
        Self::with_squares(size, vec![Square::Empty; size * size], first)
    }

    /// Parse a grid from one string per row, using `x`, `o` and `.` (or a
    /// space) for empty squares. Returns `None` if the grid isn't square or
    /// contains another character.
    pub fn from_rows(to_move: Player, rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut squares = Vec::with_capacity(size * size);
        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for c in row.chars() {
                squares.push(match c {
                    'x' | 'X' => Square::X,
                    'o' | 'O' => Square::O,
                    '.' | ' ' => Square::Empty,
                    _ => return None,
                });
            }
        }
        Some(Self::with_squares(size, squares, to_move))
    }

    fn with_squares(size: usize, squares: Vec<Square>, to_move: Player) -> Self {
        let mut t = Tippy { size, squares, to_move, over: false };
        t.over = t.has_tippy(Square::X)
            || t.has_tippy(Square::O)
            || t.squares.iter().all(|&s| s != Square::Empty);
        t
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The contents of square `(x, y)`, or `None` if it is off the grid.
    pub fn square(&self, x: usize, y: usize) -> Option<Square> {
        if x < self.size && y < self.size {
            Some(self.squares[x * self.size + y])
        } else {
            None
        }
    }

    fn owns(&self, x: isize, y: isize, s: Square) -> bool {
        let n = self.size as isize;
        x >= 0 && x < n && y >= 0 && y < n && self.squares[(x * n + y) as usize] == s
    }

    fn has_tippy(&self, s: Square) -> bool {
        let n = self.size as isize;
        (0..n).any(|x| (0..n).any(|y| self.tippy_at(x, y, s)))
    }

    fn tippy_at(&self, x: isize, y: isize, s: Square) -> bool {
        SHAPES.iter().any(|shape| shape.iter().all(|&(dx, dy)| self.owns(x + dx, y + dy, s)))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Place {
    pub x: usize,
    pub y: usize,
}

impl Place {
    pub fn new(x: usize, y: usize) -> Self {
        Place { x, y }
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl GameState for Tippy {
    type M = Place;

    fn next_player(&self) -> Player {
        self.to_move
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn possible_next_moves(&self) -> Vec<Place> {
        if self.over {
            return Vec::new();
        }
        (0..self.squares.len())
            .filter(|&i| self.squares[i] == Square::Empty)
            .map(|i| Place::new(i / self.size, i % self.size))
            .collect()
    }

    fn apply_move(&self, m: &Place) -> Option<Self> {
        let (x, y) = (m.x, m.y);
        if self.over || self.square(x, y) != Some(Square::Empty) {
            return None;
        }
        let mut squares = self.squares.clone();
        squares[x * self.size + y] = Square::from(self.to_move);
        Some(Self::with_squares(self.size, squares, self.to_move.opponent()))
    }

    fn winner(&self, player: Player) -> bool {
        self.has_tippy(Square::from(player))
    }
}

/// The player to move plus the contents of every square.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TippyKey {
    to_move: Player,
    squares: Box<[Square]>,
}

impl CanonicalKey for Tippy {
    type Key = TippyKey;

    fn canonical_key(&self) -> TippyKey {
        TippyKey { to_move: self.to_move, squares: self.squares.clone().into_boxed_slice() }
    }
}

impl Display for Tippy {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "Next player: {}", self.to_move)?;
        write!(f, " ")?;
        for y in 0..self.size {
            write!(f, " {}", y)?;
        }
        writeln!(f, " (y)")?;
        for x in 0..self.size {
            write!(f, "{}[", x)?;
            for y in 0..self.size {
                if y > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.squares[x * self.size + y])?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "(x)")
    }
}

#[test]
fn test_every_orientation_wins() {
    let grids: [[&str; 3]; 4] = [
        ["x..", "xx.", ".x."],
        [".x.", "xx.", "x.."],
        ["xx.", ".xx", "..."],
        [".xx", "xx.", "..."],
    ];
    for rows in grids.iter() {
        let t = Tippy::from_rows(Player::Two, rows).unwrap();
        assert!(t.winner(Player::One), "{}", t);
        assert!(!t.winner(Player::Two));
        assert!(t.is_over());
        assert!(t.possible_next_moves().is_empty());
    }
}

#[test]
fn test_square_and_line_are_not_tippies() {
    for rows in [["xx.", "xx.", "..."], ["xxx", "x..", "..."], ["x..", "x..", "xx."]].iter() {
        let t = Tippy::from_rows(Player::Two, rows).unwrap();
        assert!(!t.winner(Player::One), "{}", t);
        assert!(!t.is_over());
    }
}

#[test]
fn test_full_grid_is_a_tie() {
    let t = Tippy::from_rows(Player::Two, &["xox", "xox", "oxo"]).unwrap();
    assert!(t.is_over());
    assert!(!t.winner(Player::One));
    assert!(!t.winner(Player::Two));
}

#[test]
fn test_apply_move() {
    let t = Tippy::new(Player::One, 3);
    assert_eq!(t.possible_next_moves().len(), 9);
    assert_eq!(t.possible_next_moves()[5], Place::new(1, 2));
    let u = t.apply_move(&Place::new(1, 2)).unwrap();
    assert_eq!(u.square(1, 2), Some(Square::X));
    assert_eq!(u.next_player(), Player::Two);
    assert!(u.apply_move(&Place::new(1, 2)).is_none());
    assert!(u.apply_move(&Place::new(3, 0)).is_none());
    assert_eq!(t.square(1, 2), Some(Square::Empty));
}

#[test]
fn test_square_off_the_grid() {
    let t = Tippy::from_rows(Player::One, &["x..", "...", "..o"]).unwrap();
    assert_eq!(t.square(0, 0), Some(Square::X));
    assert_eq!(t.square(2, 2), Some(Square::O));
    assert_eq!(t.square(0, 3), None);
    assert_eq!(t.square(3, 0), None);
    assert!(t.apply_move(&Place::new(0, 3)).is_none());
}

#[test]
fn test_large_grid_moves_are_distinct() {
    let t = Tippy::new(Player::One, 257);
    let moves = t.possible_next_moves();
    assert_eq!(moves.len(), 257 * 257);
    let distinct: std::collections::HashSet<Place> = moves.iter().copied().collect();
    assert_eq!(distinct.len(), moves.len());
    assert_eq!(moves[257], Place::new(1, 0));
    assert_eq!(moves.last(), Some(&Place::new(256, 256)));
    let u = t.apply_move(&Place::new(256, 256)).unwrap();
    assert_eq!(u.square(256, 256), Some(Square::X));
    assert_eq!(u.possible_next_moves().len(), 257 * 257 - 1);
}

#[test]
fn test_key() {
    let a = Tippy::new(Player::One, 3)
        .apply_move(&Place::new(0, 0))
        .and_then(|t| t.apply_move(&Place::new(1, 1)))
        .and_then(|t| t.apply_move(&Place::new(2, 2)))
        .unwrap();
    let b = Tippy::new(Player::One, 3)
        .apply_move(&Place::new(2, 2))
        .and_then(|t| t.apply_move(&Place::new(1, 1)))
        .and_then(|t| t.apply_move(&Place::new(0, 0)))
        .unwrap();
    assert_eq!(a.canonical_key(), b.canonical_key());
    let c = Tippy::from_rows(Player::One, &["x..", ".o.", "..x"]).unwrap();
    assert_ne!(a.canonical_key(), c.canonical_key());
}

#[test]
fn test_display() {
    let t = Tippy::from_rows(Player::One, &["x.o", "...", ".x."]).unwrap();
    assert_eq!(t.to_string(), "Next player: p1\n  0 1 2 (y)\n0[x| |o]\n1[ | | ]\n2[ |x| ]\n(x)");
}
