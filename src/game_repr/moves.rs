use std::fmt;

use smallvec::SmallVec;

use super::square::Square;

/// Destination squares for a single piece. A queen in the open has 27.
pub type Targets = SmallVec<[Square; 32]>;

/// A (from, to) candidate. Captures and promotion are read off the board when
/// the move is applied, so the move itself carries nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
