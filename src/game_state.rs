//! Rules engine: the authoritative position, the side to move and the move
//! history of one game session.
//!
//! The rule set is deliberately small. Moves are pseudo-legal, kings can be
//! captured, pawns always promote to a queen, and the game is over once
//! fewer than two kings remain. There is no check, castling, en passant or
//! draw detection.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ChessError, MoveRejection};
use crate::game_repr::{Color, Piece, Position, Square, Type};

/// One applied move, as recorded in the history and in saved games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Code of the piece that moved (a promoting pawn is recorded as a pawn).
    pub piece: char,
    pub captured: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    position: Position,
    turn: Color,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting layout, white to move, empty history.
    pub fn new() -> Self {
        Self {
            position: Position::starting(),
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Resume from an arbitrary position.
    pub fn from_parts(position: Position, turn: Color, history: Vec<MoveRecord>) -> Self {
        Self {
            position,
            turn,
            history,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Validate and play `from -> to` for the side to move.
    ///
    /// On rejection the state is left untouched and the error carries the
    /// reason. On success the capture (if any) is recorded, a pawn reaching
    /// the far row becomes a queen, and the turn passes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, ChessError> {
        let reject = |reason| {
            debug!("rejected {}{}: {}", from, to, reason);
            Err(ChessError::InvalidMove { from, to, reason })
        };

        let Some(piece) = self.position.piece_at(from) else {
            return reject(MoveRejection::NoPiece);
        };
        if piece.color != self.turn {
            return reject(MoveRejection::NotYourTurn);
        }
        if !self.position.legal_moves(from).contains(&to) {
            return reject(MoveRejection::IllegalDestination);
        }

        let captured = self.position.move_piece(from, to);

        if piece.piece_type == Type::Pawn && to.row() == piece.color.promotion_row() {
            self.position
                .set_piece(to, Some(Piece::new(piece.color, Type::Queen, to)));
        }

        let record = MoveRecord {
            from,
            to,
            piece: piece.code(),
            captured: captured.map(|p| p.code()),
        };
        debug!(
            "{} plays {}{}{}",
            self.turn,
            from,
            to,
            record
                .captured
                .map(|c| format!(" capturing {}", c))
                .unwrap_or_default()
        );
        self.history.push(record.clone());
        self.turn = self.turn.opposite();
        Ok(record)
    }

    /// [`GameState::apply_move`] with algebraic input such as `"e2"`, `"e4"`.
    pub fn apply_move_str(&mut self, from: &str, to: &str) -> Result<MoveRecord, ChessError> {
        let from = Square::from_algebraic(from)?;
        let to = Square::from_algebraic(to)?;
        self.apply_move(from, to)
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// The side that still has a king once the game is over.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }
        match (
            self.position.king_square(Color::White),
            self.position.king_square(Color::Black),
        ) {
            (Some(_), None) => Some(Color::White),
            (None, Some(_)) => Some(Color::Black),
            _ => None,
        }
    }
}
