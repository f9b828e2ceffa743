//! Error types for move application and engine configuration.

use thiserror::Error;

use crate::board::Coord;

/// Result of attempting to apply a move that is not legal.
///
/// This is the only error expected during normal play; the board is left
/// untouched when it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Target is occupied, off the board, or captures nothing
    #[error("illegal move at {coord}")]
    Illegal { coord: Coord },
}

/// Fatal configuration problems, detected before any search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown heuristic '{0}'")]
    UnknownHeuristic(String),
    #[error("search depth must be positive")]
    NonPositiveDepth,
    #[error("malformed weight tuple: {0}")]
    MalformedWeights(String),
}

/// Failures of an interactive or self-play session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Move(#[from] MoveError),
}
