// AI Player implementation using minimax search

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::ai::search;
use crate::agent::player::Player;
use crate::config::Difficulty;
use crate::game_repr::Move;
use crate::game_state::GameState;

/// AI Player that uses minimax search to select moves
pub struct AiPlayer {
    difficulty: Difficulty,
    /// Display name for this AI
    name: String,
    /// Tie-break source, owned so seeded games replay identically
    rng: StdRng,
}

impl AiPlayer {
    /// Create a new AI player
    ///
    /// # Arguments
    ///
    /// * `difficulty` - Chooses the search depth
    /// * `seed` - Seed for the tie-break; `None` draws from system entropy
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            difficulty,
            name: format!("AI ({:?})", difficulty),
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for AiPlayer {
    /// Runs the search to completion; cost grows with the branching factor
    /// raised to the depth.
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let result = search(
            state.position(),
            state.turn(),
            self.difficulty.depth(),
            &mut self.rng,
        );
        if let Some(mv) = result.best_move {
            info!(
                "[{}] {} (score {}, {} tied, {} nodes)",
                self.name,
                mv,
                result.score,
                result.tied.len(),
                result.nodes_searched
            );
        }
        result.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Color;

    #[test]
    fn test_ai_move_is_accepted_by_rules() {
        let mut state = GameState::new();
        let mut white = AiPlayer::new(Difficulty::Easy, Some(1));
        let mut black = AiPlayer::new(Difficulty::Medium, Some(2));

        for _ in 0..6 {
            let player: &mut AiPlayer = match state.turn() {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            let mv = player.get_move(&state).unwrap();
            state.apply_move(mv.from, mv.to).unwrap();
        }
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut state = GameState::new();
            let mut ai = AiPlayer::new(Difficulty::Easy, Some(seed));
            for _ in 0..8 {
                let mv = ai.get_move(&state).unwrap();
                state.apply_move(mv.from, mv.to).unwrap();
            }
            state
        };
        assert_eq!(play(17), play(17));
    }

    #[test]
    fn test_name_mentions_difficulty() {
        let ai = AiPlayer::new(Difficulty::Hard, None);
        assert_eq!(ai.name(), "AI (Hard)");
        assert_eq!(ai.difficulty(), Difficulty::Hard);
    }
}
