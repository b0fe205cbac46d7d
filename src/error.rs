//! Error types for the oxo crate

use std::fmt;

use thiserror::Error;

/// Why a move was rejected by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveKind {
    /// The target cell already holds a mark
    Occupied,
    /// The index does not name a cell (must be 0-8)
    OutOfRange,
}

impl fmt::Display for InvalidMoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveKind::Occupied => write!(f, "is already occupied"),
            InvalidMoveKind::OutOfRange => write!(f, "is out of bounds (must be 0-8)"),
        }
    }
}

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} {kind}")]
    InvalidMove {
        position: usize,
        kind: InvalidMoveKind,
    },

    #[error("cannot choose a move in a finished position:\n{board}")]
    TerminalPosition { board: String },

    #[error("game already over")]
    GameOver,

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    ParseMark { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn occupied(position: usize) -> Self {
        Error::InvalidMove {
            position,
            kind: InvalidMoveKind::Occupied,
        }
    }

    pub(crate) fn out_of_range(position: usize) -> Self {
        Error::InvalidMove {
            position,
            kind: InvalidMoveKind::OutOfRange,
        }
    }
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
