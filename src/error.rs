//! Error types for the tictree crate

use thiserror::Error;

use crate::{tictactoe::Player, tree::NodeId};

/// Main error type for the tictree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("{player} cannot move: it is {expected}'s turn")]
    WrongPlayer { player: Player, expected: Player },

    #[error("game already over before opening move {index} (position {position})")]
    GameOver { index: usize, position: usize },

    #[error("invalid outcome '{input}'. Expected one of: {expected}")]
    ParseOutcome { input: String, expected: String },

    #[error("invalid player '{input}'. Expected one of: {expected}")]
    ParsePlayer { input: String, expected: String },

    #[error("invalid convergence rule '{input}'. Expected one of: {expected}")]
    ParseConvergence { input: String, expected: String },

    #[error("invalid opening '{input}': {reason}")]
    ParseOpening { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("node {node} is not part of the tree")]
    DanglingNode { node: NodeId },

    #[error("tree invariant violated at node {node}: {message}")]
    InvariantViolation { node: NodeId, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
