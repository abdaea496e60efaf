use crate::game_repr::{Color, Position, Square, Targets};

impl Position {
    /// Rook rays followed by bishop rays from the same square.
    pub fn queen_moves_into(&self, from: Square, color: Color, moves: &mut Targets) {
        self.rook_moves_into(from, color, moves);
        self.bishop_moves_into(from, color, moves);
    }
}
