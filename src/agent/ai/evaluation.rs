// Position evaluation function
// Plain material count, positive = good for White

use crate::game_repr::{Color, Position, Type};

// Material values in whole pawns. The king outweighs everything else
// combined, so losing it dominates any other consideration.
const PAWN_VALUE: i32 = 1;
const KNIGHT_VALUE: i32 = 3;
const BISHOP_VALUE: i32 = 3;
const ROOK_VALUE: i32 = 5;
const QUEEN_VALUE: i32 = 9;
const KING_VALUE: i32 = 1000;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
    }
}

/// Static score: white material minus black material.
pub fn evaluate(pos: &Position) -> i32 {
    pos.pieces(None)
        .map(|p| match p.color {
            Color::White => piece_value(p.piece_type),
            Color::Black => -piece_value(p.piece_type),
        })
        .sum()
}
