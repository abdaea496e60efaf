// Root Move Selection
//
// The root is searched differently from interior nodes: every root move is
// scored with a full window so that all moves sharing the best score are
// known, then one of them is picked at random.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_repr::{Color, Move, Position};
use super::minimax::{minimax, INFINITY};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, `None` if the side to move has no moves at all
    pub best_move: Option<Move>,
    /// Score of the best root moves, from White's point of view
    pub score: i32,
    /// Every root move that reached `score`, in enumeration order
    pub tied: Vec<Move>,
    pub depth: u8,
    pub nodes_searched: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new(color: Color, depth: u8) -> Self {
        Self {
            best_move: None,
            score: match color {
                Color::White => -INFINITY,
                Color::Black => INFINITY,
            },
            tied: Vec::new(),
            depth,
            nodes_searched: 0,
        }
    }
}

/// Search `depth` plies for `color` and pick a move.
///
/// A depth of 0 is treated as 1: the root always looks one move ahead.
/// The tie-break draws from `rng`, so a seeded generator makes the choice
/// reproducible.
pub fn search<R: Rng + ?Sized>(pos: &Position, color: Color, depth: u8, rng: &mut R) -> SearchResult {
    let depth = depth.max(1);
    let mut result = SearchResult::new(color, depth);

    for mv in pos.all_moves(color) {
        let mut child = pos.clone();
        child.move_piece(mv.from, mv.to);
        let score = minimax(
            &child,
            depth - 1,
            -INFINITY,
            INFINITY,
            color.opposite(),
            &mut result.nodes_searched,
        );

        let improves = match color {
            Color::White => score > result.score,
            Color::Black => score < result.score,
        };
        if improves {
            result.score = score;
            result.tied.clear();
            result.tied.push(mv);
        } else if score == result.score {
            result.tied.push(mv);
        }
    }

    result.best_move = result.tied.choose(rng).copied();

    debug!(
        "search {} depth {}: {} nodes, score {}, {} tied, chose {}",
        color,
        depth,
        result.nodes_searched,
        result.score,
        result.tied.len(),
        result
            .best_move
            .map_or_else(|| "nothing".to_string(), |m| m.to_string())
    );

    result
}

/// Convenience wrapper returning only the chosen move.
pub fn best_move<R: Rng + ?Sized>(pos: &Position, color: Color, depth: u8, rng: &mut R) -> Option<Move> {
    search(pos, color, depth, rng).best_move
}
