use std::fmt;

use crate::error::ChessError;
use super::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Uppercase letter for this kind.
    pub fn letter(self) -> char {
        match self {
            Type::King => 'K',
            Type::Queen => 'Q',
            Type::Rook => 'R',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Pawn => 'P',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::King => "king",
            Type::Queen => "queen",
            Type::Rook => "rook",
            Type::Bishop => "bishop",
            Type::Knight => "knight",
            Type::Pawn => "pawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// `'w'` or `'b'`, as used in saved games.
    pub fn code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "w" => Some(Self::White),
            "b" => Some(Self::Black),
            _ => None,
        }
    }

    /// Row a pawn of this color moves toward.
    pub fn promotion_row(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A piece together with the square it occupies.
///
/// `square` is kept in sync by [`Position`](super::Position); a piece never
/// exists outside the board that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
    pub square: Square,
}

impl Piece {
    pub fn new(color: Color, piece_type: Type, square: Square) -> Self {
        Self {
            color,
            piece_type,
            square,
        }
    }

    /// Decode a single-letter code. Uppercase is white, lowercase black.
    pub fn from_code(c: char, square: Square) -> Result<Self, ChessError> {
        let piece_type = match c.to_ascii_uppercase() {
            'P' => Type::Pawn,
            'N' => Type::Knight,
            'B' => Type::Bishop,
            'R' => Type::Rook,
            'Q' => Type::Queen,
            'K' => Type::King,
            _ => return Err(ChessError::InvalidPieceCode(c)),
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Self::new(color, piece_type, square))
    }

    pub fn code(&self) -> char {
        match self.color {
            Color::White => self.piece_type.letter(),
            Color::Black => self.piece_type.letter().to_ascii_lowercase(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}
