use std::fmt;

use thiserror::Error;

use crate::game_repr::Square;

/// Why the rules engine refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    NoPiece,
    NotYourTurn,
    IllegalDestination,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveRejection::NoPiece => "No piece at source.",
            MoveRejection::NotYourTurn => "Not your turn.",
            MoveRejection::IllegalDestination => "Illegal move.",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid move {from} -> {to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: MoveRejection,
    },

    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    #[error("invalid piece code: {0:?}")]
    InvalidPieceCode(char),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("malformed saved game: {0}")]
    Persistence(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChessError {
    /// The short reason text shown to a player, if this is a rejected move.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            ChessError::InvalidMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChessError {
    fn from(err: serde_json::Error) -> Self {
        ChessError::Persistence(err.to_string())
    }
}
