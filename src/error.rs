use thiserror::Error;

/// Errors that can occur during a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Game is already over, no move to suggest")]
    TerminalState,

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("No legal moves available in a state that is not over")]
    NoLegalMoves,
}
