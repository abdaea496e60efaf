// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the computer opponent: a fixed-depth minimax search
// with alpha-beta pruning over a material-only evaluation.
//
// Key features:
// - Pure function of (position, side, depth); nothing persists between calls
// - Each explored move works on its own board clone
// - Every root move is scored so ties can be broken at random
// - The random source is passed in, so seeded runs are reproducible

mod evaluation;
mod minimax;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::{evaluate, piece_value};
pub use minimax::{minimax, INFINITY};
pub use search::{best_move, search, SearchResult};
