use crate::game_repr::{Color, Move, Position};
use crate::agent::ai::{evaluate, INFINITY};

/// Full-width minimax with no pruning, used as the reference the pruned
/// search must agree with.
pub fn brute_force(pos: &Position, depth: u8, color: Color, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }
    let scores = pos.all_moves(color).into_iter().map(|mv| {
        let mut child = pos.clone();
        child.move_piece(mv.from, mv.to);
        brute_force(&child, depth - 1, color.opposite(), nodes)
    });
    match color {
        Color::White => scores.fold(-INFINITY, i32::max),
        Color::Black => scores.fold(INFINITY, i32::min),
    }
}

/// Brute-force score of every root move.
pub fn brute_force_root(pos: &Position, depth: u8, color: Color) -> Vec<(Move, i32)> {
    let mut nodes = 0;
    pos.all_moves(color)
        .into_iter()
        .map(|mv| {
            let mut child = pos.clone();
            child.move_piece(mv.from, mv.to);
            (mv, brute_force(&child, depth - 1, color.opposite(), &mut nodes))
        })
        .collect()
}

/// Best root score and the moves tied on it, by brute force.
pub fn brute_force_best(pos: &Position, depth: u8, color: Color) -> (i32, Vec<Move>) {
    let root = brute_force_root(pos, depth, color);
    let best = match color {
        Color::White => root.iter().map(|&(_, s)| s).max(),
        Color::Black => root.iter().map(|&(_, s)| s).min(),
    };
    match best {
        Some(best) => (
            best,
            root.iter().filter(|&&(_, s)| s == best).map(|&(m, _)| m).collect(),
        ),
        None => (
            match color {
                Color::White => -INFINITY,
                Color::Black => INFINITY,
            },
            Vec::new(),
        ),
    }
}

/// Small positions with captures available for both sides.
pub const SAMPLE_LAYOUTS: [&str; 6] = [
    "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr",
    "4K3/8/2n5/3Q4/8/5b2/8/4k3",
    "K7/1P6/2r5/8/3N4/8/6p1/7k",
    "2K5/8/8/3q4/3R4/8/8/2k5",
    "R3K3/8/8/8/8/b7/1n6/4k2r",
    "3K4/2P1P3/3n4/8/8/3N4/2p1p3/3k4",
];
