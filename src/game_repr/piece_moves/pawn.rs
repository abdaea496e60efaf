use crate::game_repr::{Color, Position, Square, Targets};

impl Position {
    // No en passant. Promotion is handled when the move is applied.
    pub fn pawn_moves_into(&self, from: Square, color: Color, moves: &mut Targets) {
        let (forward, start_row): (i8, u8) = match color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };

        if let Some(one) = from.offset(forward, 0) {
            if self.piece_at(one).is_none() {
                moves.push(one);
                if from.row() == start_row {
                    if let Some(two) = from.offset(2 * forward, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(forward, dc) {
                if matches!(self.piece_at(target), Some(p) if p.color != color) {
                    moves.push(target);
                }
            }
        }
    }
}
