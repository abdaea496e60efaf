use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Parse algebraic notation, panicking on typos in the test itself
pub fn sq(text: &str) -> Square {
    Square::from_algebraic(text).unwrap()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, at: &str, color: Color, piece_type: Type) {
    pos.put(color, piece_type, sq(at));
}

/// Helper function to check if a destination exists in the move list
pub fn has_move(moves: &[Square], to: &str) -> bool {
    moves.contains(&sq(to))
}

/// Destinations rendered as sorted algebraic strings, for whole-set comparisons
pub fn targets_of(pos: &Position, from: &str) -> Vec<String> {
    let mut out: Vec<String> = pos
        .legal_moves(sq(from))
        .iter()
        .map(|s| s.to_algebraic())
        .collect();
    out.sort();
    out
}

// ==================== TEST MODULES ====================

mod pawn_movement;
