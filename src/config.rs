//! Choosing a strategy by name.

use crate::interface::{CanonicalKey, GameState, Strategy};
use crate::strategies::memoize::{MemoOptions, MemoizedMinimaxSearch};
use crate::strategies::minimax::MinimaxSearch;
use crate::strategies::prune::PrunedMinimaxSearch;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// The search strategies this crate provides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Minimax,
    Pruned,
    Memoized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown algorithm {0:?}, expected one of: minimax (m), prune (mp), memoize (mm)")]
pub struct ParseAlgorithmError(String);

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Minimax, Algorithm::Pruned, Algorithm::Memoized];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::Pruned => "prune",
            Algorithm::Memoized => "memoize",
        }
    }

    /// A fresh strategy of this kind, with default options.
    pub fn build<S>(self) -> Box<dyn Strategy<S>>
    where
        S: GameState + CanonicalKey,
    {
        self.build_with(MemoOptions::default())
    }

    /// A fresh strategy of this kind. `memo` only affects `Memoized`.
    pub fn build_with<S>(self, memo: MemoOptions) -> Box<dyn Strategy<S>>
    where
        S: GameState + CanonicalKey,
    {
        match self {
            Algorithm::Minimax => Box::new(MinimaxSearch::new()),
            Algorithm::Pruned => Box::new(PrunedMinimaxSearch::new()),
            Algorithm::Memoized => Box::new(MemoizedMinimaxSearch::with_options(memo)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "m" => Ok(Algorithm::Minimax),
            "prune" | "pruned" | "mp" => Ok(Algorithm::Pruned),
            "memoize" | "memoized" | "mm" => Ok(Algorithm::Memoized),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[test]
fn test_parse_algorithm() {
    assert_eq!("m".parse::<Algorithm>(), Ok(Algorithm::Minimax));
    assert_eq!("Prune".parse::<Algorithm>(), Ok(Algorithm::Pruned));
    assert_eq!(" mm ".parse::<Algorithm>(), Ok(Algorithm::Memoized));
    assert!("random".parse::<Algorithm>().is_err());
    for a in Algorithm::ALL {
        assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
    }
}
