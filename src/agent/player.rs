//! Player trait and associated types for chess game agents.
//!
//! Anything that can choose a move for one side implements [`Player`]: the
//! computer opponent, a person typing moves, or a fixed script in tests. The
//! orchestrator asks the side to move for a move, validates it through the
//! rules engine and reports back.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks. A human player waits for input and the computer
//! player runs its search to completion before returning. A host that must
//! not block can run the whole turn on a worker thread.

use std::collections::VecDeque;

use crate::game_repr::{Color, Move};
use crate::game_state::{GameState, MoveRecord};

/// Result of a finished or interrupted game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black's king was captured
    WhiteWins,
    /// White's king was captured
    BlackWins,
    /// The side to move had no moves at all
    NoMoves(Color),
    /// A player declined to move (quit, script exhausted)
    Abandoned(Color),
    /// The configured ply limit was reached
    PlyLimit,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

/// Trait for entities that can provide chess moves.
pub trait Player {
    /// Request the next move for the side to move in `state`.
    ///
    /// `None` means the player cannot or will not move. A returned move is
    /// validated by the caller, and a rejected move leads to another call.
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// The move this player proposed was refused, with the reason text.
    fn move_rejected(&mut self, _mv: Move, _reason: &str) {}

    /// This player's own move has been applied; `state` is the position after it.
    fn own_move_applied(&mut self, _state: &GameState, _record: &MoveRecord) {}

    /// The opponent's move has been applied.
    fn opponent_moved(&mut self, _record: &MoveRecord) {}

    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}

/// Plays a fixed list of moves, then gives up.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
    pub rejected: Vec<(Move, String)>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            rejected: Vec::new(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn get_move(&mut self, _state: &GameState) -> Option<Move> {
        self.moves.pop_front()
    }

    fn move_rejected(&mut self, mv: Move, reason: &str) {
        self.rejected.push((mv, reason.to_string()));
    }

    fn name(&self) -> &str {
        "Script"
    }
}
