pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::moves::Targets;
use super::piece::{Color, Type};
use super::position::Position;
use super::square::Square;

impl Position {
    /// Pseudo-legal destinations for the piece on `square`: on the board and
    /// not onto a piece of the same color. King safety is never considered.
    /// An empty square yields nothing.
    pub fn legal_moves(&self, square: Square) -> Targets {
        let mut moves = Targets::new();
        self.legal_moves_into(square, &mut moves);
        moves
    }

    /// Same as [`Position::legal_moves`] but appends into a provided buffer.
    pub fn legal_moves_into(&self, square: Square, moves: &mut Targets) {
        let Some(piece) = self.piece_at(square) else {
            return;
        };
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(square, piece.color, moves),
            Type::Knight => self.knight_moves_into(square, piece.color, moves),
            Type::Bishop => self.bishop_moves_into(square, piece.color, moves),
            Type::Rook => self.rook_moves_into(square, piece.color, moves),
            Type::Queen => self.queen_moves_into(square, piece.color, moves),
            Type::King => self.king_moves_into(square, piece.color, moves),
        }
    }

    /// Walk each direction outward from `from`. Empty squares are added and
    /// the walk continues; an enemy piece is added and ends the ray; an own
    /// piece ends the ray without being added.
    pub(crate) fn slide_into(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut Targets,
    ) {
        for &(dr, dc) in directions {
            let mut next = from.offset(dr, dc);
            while let Some(target) = next {
                match self.piece_at(target) {
                    None => moves.push(target),
                    Some(p) if p.color != color => {
                        moves.push(target);
                        break;
                    }
                    Some(_) => break,
                }
                next = target.offset(dr, dc);
            }
        }
    }

    /// Single jumps by each offset, kept when on the board and not onto an
    /// own piece.
    pub(crate) fn step_into(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut Targets,
    ) {
        for &(dr, dc) in offsets {
            if let Some(target) = from.offset(dr, dc) {
                match self.piece_at(target) {
                    Some(p) if p.color == color => {}
                    _ => moves.push(target),
                }
            }
        }
    }
}
