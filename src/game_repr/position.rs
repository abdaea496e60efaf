use std::fmt;

use super::*;
use crate::error::ChessError;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STORAGE AND PIECE PLACEMENT
 */

/// Placement of the initial layout, first field is row 0 (rank 8).
pub const STARTING_LAYOUT: &str = "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr";

/// 8x8 mailbox. Each occupied cell holds a piece whose `square` equals the
/// cell it sits in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn starting() -> Self {
        let mut pos = Self::empty();
        let back_rank = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        for (col, &kind) in back_rank.iter().enumerate() {
            let col = col as u8;
            pos.put(Color::White, kind, Square::new(0, col));
            pos.put(Color::White, Type::Pawn, Square::new(1, col));
            pos.put(Color::Black, Type::Pawn, Square::new(6, col));
            pos.put(Color::Black, kind, Square::new(7, col));
        }
        pos
    }

    /// Parse a FEN-style placement field. Unlike FEN, the first rank listed
    /// is row 0, so `STARTING_LAYOUT` round-trips through [`Position::layout`].
    pub fn from_layout(layout: &str) -> Result<Position, ChessError> {
        let placement = layout.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(ChessError::InvalidLayout(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut pos = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col: u8 = 0;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if col as u32 + skip > 8 {
                        return Err(ChessError::InvalidLayout(format!(
                            "row {} is wider than 8 squares",
                            row
                        )));
                    }
                    col += skip as u8;
                    continue;
                }
                if col >= 8 {
                    return Err(ChessError::InvalidLayout(format!(
                        "row {} is wider than 8 squares",
                        row
                    )));
                }
                let square = Square::new(row as u8, col);
                pos.set_piece(square, Some(Piece::from_code(c, square)?));
                col += 1;
            }
            if col != 8 {
                return Err(ChessError::InvalidLayout(format!(
                    "row {} covers {} squares",
                    row, col
                )));
            }
        }
        Ok(pos)
    }

    pub fn layout(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let mut empty_count = 0;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.code());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Place (or clear, with `None`) a square. The piece's stored square is
    /// rewritten to match.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece.map(|mut p| {
            p.square = square;
            p
        });
    }

    /// Convenience for building positions.
    pub fn put(&mut self, color: Color, piece_type: Type, square: Square) {
        self.set_piece(square, Some(Piece::new(color, piece_type, square)));
    }

    pub fn clear(&mut self, square: Square) {
        self.set_piece(square, None);
    }

    /// Relocate whatever sits on `from` to `to`, returning the piece that was
    /// on `to` beforehand.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.piece_at(from);
        let captured = self.piece_at(to);
        self.set_piece(to, moving);
        self.clear(from);
        captured
    }

    /// All pieces, optionally of one color, row 0 to 7 then column 0 to 7.
    /// Search relies on this order being stable.
    pub fn pieces(&self, color: Option<Color>) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|cell| *cell)
            .filter(move |p| color.map_or(true, |c| p.color == c))
    }

    /// Every pseudo-legal (from, to) for `color`, in enumeration order.
    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for piece in self.pieces(Some(color)) {
            moves.extend(
                self.legal_moves(piece.square)
                    .into_iter()
                    .map(|to| Move::new(piece.square, to)),
            );
        }
        moves
    }

    pub fn king_count(&self) -> usize {
        self.pieces(None)
            .filter(|p| p.piece_type == Type::King)
            .count()
    }

    /// Kings can be captured here, so the game ends once one is gone.
    pub fn is_game_over(&self) -> bool {
        self.king_count() < 2
    }

    /// True if some `by_color` piece has a pseudo-legal move onto `square`.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.pieces(Some(by_color))
            .any(|p| self.legal_moves(p.square).contains(&square))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(Some(color))
            .find(|p| p.piece_type == Type::King)
            .map(|p| p.square)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self.squares[row][col].map_or('.', |p| p.code());
                write!(f, "{}", c)?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
