use crate::game_repr::{Color, Position, Square, Targets};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, color: Color, moves: &mut Targets) {
        self.step_into(from, color, &KNIGHT_OFFSETS, moves);
    }
}
