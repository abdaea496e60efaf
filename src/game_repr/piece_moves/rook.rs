use crate::game_repr::{Color, Position, Square, Targets};

pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Position {
    pub fn rook_moves_into(&self, from: Square, color: Color, moves: &mut Targets) {
        self.slide_into(from, color, &ORTHOGONALS, moves);
    }
}
