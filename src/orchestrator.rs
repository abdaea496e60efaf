//! Turn loop that drives two players over one game.
//!
//! # Game Flow
//!
//! ```text
//! [Check End] -> [Request Move from side to move] -> [Apply via rules engine]
//!   -> rejected: tell the player, ask again
//!   -> applied:  notify both players, autosave, next turn
//! ```

use std::io;
use std::path::PathBuf;

use log::{info, warn};

use crate::agent::{AiPlayer, GameResult, HumanPlayer, Player};
use crate::config::{Difficulty, GameConfig, PlayerConfig};
use crate::error::ChessError;
use crate::game_repr::Color;
use crate::game_state::{GameState, MoveRecord};
use crate::persistence;

/// What a single [`Orchestrator::step`] did.
#[derive(Debug)]
pub enum StepOutcome {
    Moved(MoveRecord),
    /// The proposed move was refused; the same side is asked again next step
    Rejected(ChessError),
    /// The side to move has no pseudo-legal moves
    NoMoves,
    /// The player declined to move
    Abandoned,
    GameOver,
}

pub struct Orchestrator {
    state: GameState,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    max_plies: Option<usize>,
    save_path: Option<PathBuf>,
    plies: usize,
}

impl Orchestrator {
    pub fn new(state: GameState, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            state,
            white,
            black,
            max_plies: None,
            save_path: None,
            plies: 0,
        }
    }

    /// Players, limits and autosave from `config`. Human sides play on the
    /// console.
    pub fn from_config(config: &GameConfig, state: GameState) -> Self {
        let make = |color: Color| -> Box<dyn Player> {
            // Distinct streams per side so two seeded players don't mirror each other
            let seed = config.seed.map(|s| match color {
                Color::White => s,
                Color::Black => s.wrapping_add(1),
            });
            match config.player(color) {
                PlayerConfig::Human => Box::new(HumanPlayer::new(
                    io::stdin(),
                    io::stdout(),
                    format!("{} player", color),
                    Difficulty::default(),
                    seed,
                )),
                PlayerConfig::Ai { difficulty } => Box::new(AiPlayer::new(difficulty, seed)),
            }
        };
        let mut orchestrator = Self::new(state, make(Color::White), make(Color::Black));
        orchestrator.max_plies = config.max_plies;
        orchestrator.save_path = config.save_path.clone();
        orchestrator
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Ask the side to move for one move and try to apply it.
    pub fn step(&mut self) -> StepOutcome {
        if self.state.is_game_over() {
            return StepOutcome::GameOver;
        }
        let turn = self.state.turn();
        if self.state.position().all_moves(turn).is_empty() {
            return StepOutcome::NoMoves;
        }

        let (mover, opponent) = match turn {
            Color::White => (&mut self.white, &mut self.black),
            Color::Black => (&mut self.black, &mut self.white),
        };
        let Some(mv) = mover.get_move(&self.state) else {
            return StepOutcome::Abandoned;
        };

        match self.state.apply_move(mv.from, mv.to) {
            Ok(record) => {
                info!("ply {}: {} {}", self.plies + 1, turn, mv);
                self.plies += 1;
                mover.own_move_applied(&self.state, &record);
                opponent.opponent_moved(&record);
                self.autosave();
                StepOutcome::Moved(record)
            }
            Err(err) => {
                let reason = err
                    .rejection()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| err.to_string());
                mover.move_rejected(mv, &reason);
                StepOutcome::Rejected(err)
            }
        }
    }

    /// Play until the game ends, a player gives up or the ply limit is hit.
    pub fn run(&mut self) -> GameResult {
        let result = loop {
            if let Some(limit) = self.max_plies {
                if self.plies >= limit && !self.state.is_game_over() {
                    break GameResult::PlyLimit;
                }
            }
            let turn = self.state.turn();
            match self.step() {
                StepOutcome::Moved(_) | StepOutcome::Rejected(_) => continue,
                StepOutcome::NoMoves => break GameResult::NoMoves(turn),
                StepOutcome::Abandoned => break GameResult::Abandoned(turn),
                StepOutcome::GameOver => match self.state.winner() {
                    Some(winner) => break GameResult::from_winner(winner),
                    None => break GameResult::NoMoves(turn),
                },
            }
        };

        info!("game finished after {} plies: {:?}", self.plies, result);
        self.white.game_ended(result);
        self.black.game_ended(result);
        result
    }

    fn autosave(&self) {
        if let Some(path) = &self.save_path {
            if let Err(e) = persistence::save(&self.state, path) {
                warn!("autosave to {} failed: {}", path.display(), e);
            }
        }
    }
}
