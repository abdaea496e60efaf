use crate::game_repr::{Color, Position, Square, Targets};

/// Neighbouring squares, row offset outer, column offset inner.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    /// No castling and no check filtering: the king may step next to, or
    /// onto, an enemy king.
    pub fn king_moves_into(&self, from: Square, color: Color, moves: &mut Targets) {
        self.step_into(from, color, &KING_OFFSETS, moves);
    }
}
