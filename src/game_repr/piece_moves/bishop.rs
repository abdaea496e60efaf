use crate::game_repr::{Color, Position, Square, Targets};

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Position {
    pub fn bishop_moves_into(&self, from: Square, color: Color, moves: &mut Targets) {
        self.slide_into(from, color, &DIAGONALS, moves);
    }
}
