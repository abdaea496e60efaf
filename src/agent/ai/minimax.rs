// Minimax Search with Alpha-Beta Pruning
//
// White maximises, Black minimises, scores are always from White's point of
// view. Every node works on its own clone of the board so siblings never
// see each other's moves. A move inside the search is a bare relocation:
// no promotion and no turn or history bookkeeping.

use crate::game_repr::{Color, Position};
use super::evaluation::evaluate;

/// Larger than any reachable material score.
pub const INFINITY: i32 = i32::MAX;

/// Minimax with alpha-beta pruning.
///
/// # Arguments
///
/// * `pos` - Position to search from (not modified)
/// * `depth` - Remaining plies (0 = leaf)
/// * `alpha` - Best score White is already guaranteed
/// * `beta` - Best score Black is already guaranteed
/// * `color` - Side to move at this node
/// * `nodes` - Counter bumped once per visited node
///
/// # Returns
///
/// The minimax score of `pos`. Within the window this equals the unpruned
/// minimax value; a side with no moves scores `-INFINITY` (White) or
/// `INFINITY` (Black).
pub fn minimax(
    pos: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    color: Color,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }

    match color {
        Color::White => {
            let mut best = -INFINITY;
            'pieces: for piece in pos.pieces(Some(color)) {
                for to in pos.legal_moves(piece.square) {
                    let mut child = pos.clone();
                    child.move_piece(piece.square, to);
                    let score = minimax(&child, depth - 1, alpha, beta, color.opposite(), nodes);
                    best = best.max(score);
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break 'pieces;
                    }
                }
            }
            best
        }
        Color::Black => {
            let mut best = INFINITY;
            'pieces: for piece in pos.pieces(Some(color)) {
                for to in pos.legal_moves(piece.square) {
                    let mut child = pos.clone();
                    child.move_piece(piece.square, to);
                    let score = minimax(&child, depth - 1, alpha, beta, color.opposite(), nodes);
                    best = best.min(score);
                    beta = beta.min(score);
                    if beta <= alpha {
                        break 'pieces;
                    }
                }
            }
            best
        }
    }
}
