//! Coaching hints built on the public position queries and the search.
//!
//! The advisor never changes the game it looks at. It reads the position
//! after a move, reconstructs the position before it from the history
//! record, and compares what was played with what the search would play.

use rand::Rng;

use crate::agent::ai::search;
use crate::error::ChessError;
use crate::game_repr::{Piece, Position};
use crate::game_state::{GameState, MoveRecord};

/// How many lines [`Advisor::suggestions`] returns at most.
pub const MAX_SUGGESTIONS: usize = 3;

pub struct Advisor<R> {
    depth: u8,
    rng: R,
    last_feedback: Vec<String>,
}

impl<R: Rng> Advisor<R> {
    pub fn new(depth: u8, rng: R) -> Self {
        Self {
            depth,
            rng,
            last_feedback: Vec::new(),
        }
    }

    pub fn last_feedback(&self) -> &[String] {
        &self.last_feedback
    }

    /// Comment on `record`, which must be the move that produced `state`.
    ///
    /// Warns when the moved piece or the mover's king can now be taken, and
    /// names a better move when the one played scored below the best.
    pub fn analyze_move(
        &mut self,
        state: &GameState,
        record: &MoveRecord,
    ) -> Result<Vec<String>, ChessError> {
        let mut feedback = Vec::new();
        let position = state.position();
        let Some(piece) = position.piece_at(record.to) else {
            self.last_feedback.clear();
            return Ok(feedback);
        };
        let mover = piece.color;
        let opponent = mover.opposite();

        if position.is_square_attacked(record.to, opponent) {
            feedback.push(format!(
                "Careful! Your {} on {} can be captured.",
                piece.piece_type.name(),
                record.to
            ));
        }

        if let Some(king) = position.king_square(mover) {
            if position.is_square_attacked(king, opponent) {
                feedback.push("Warning: Your king is in danger!".to_string());
            }
        }

        let before = position_before(position, record)?;
        let result = search(&before, mover, self.depth, &mut self.rng);
        let played_is_best = result
            .tied
            .iter()
            .any(|m| m.from == record.from && m.to == record.to);
        if !played_is_best {
            if let Some(better) = result.best_move {
                feedback.push(format!(
                    "Try {} next time for a stronger position.",
                    move_hint(&better.from.to_string(), &better.to.to_string())
                ));
            }
        }

        self.last_feedback = feedback.clone();
        Ok(feedback)
    }

    /// Up to [`MAX_SUGGESTIONS`] lines: the last feedback if there is any,
    /// otherwise a move for the side to move.
    pub fn suggestions(&mut self, state: &GameState) -> Vec<String> {
        if !self.last_feedback.is_empty() {
            return self
                .last_feedback
                .iter()
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect();
        }
        let result = search(state.position(), state.turn(), self.depth, &mut self.rng);
        match result.best_move {
            Some(mv) => vec![format!(
                "Consider {}!",
                move_hint(&mv.from.to_string(), &mv.to.to_string())
            )],
            None => vec!["Keep going!".to_string()],
        }
    }
}

pub fn move_hint(from: &str, to: &str) -> String {
    format!("moving {} to {}", from, to)
}

/// Undo `record` on a copy of `position`: the moved piece goes back to its
/// source (as a pawn again if it promoted) and any captured piece returns.
fn position_before(position: &Position, record: &MoveRecord) -> Result<Position, ChessError> {
    let mut before = position.clone();
    let moved = Piece::from_code(record.piece, record.from)?;
    before.set_piece(record.from, Some(moved));
    match record.captured {
        Some(code) => before.set_piece(record.to, Some(Piece::from_code(code, record.to)?)),
        None => before.clear(record.to),
    }
    Ok(before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn advisor() -> Advisor<StdRng> {
        Advisor::new(2, StdRng::seed_from_u64(3))
    }

    fn game(layout: &str, turn: Color) -> GameState {
        GameState::from_parts(Position::from_layout(layout).unwrap(), turn, Vec::new())
    }

    #[test]
    fn test_piece_can_be_captured() {
        // The d4 pawn covers c3
        let mut state = game("K7/8/8/8/3p4/8/8/1N5k", Color::White);
        let record = state.apply_move_str("b1", "c3").unwrap();
        let feedback = advisor().analyze_move(&state, &record).unwrap();
        assert_eq!(feedback[0], "Careful! Your knight on c3 can be captured.");
    }

    #[test]
    fn test_king_in_danger() {
        let mut state = game("K7/8/8/8/8/8/8/r6k", Color::White);
        let record = state.apply_move_str("a8", "b8").unwrap();
        assert!(!advisor()
            .analyze_move(&state, &record)
            .unwrap()
            .contains(&"Warning: Your king is in danger!".to_string()));

        let mut state = game("1K6/8/8/8/8/8/8/r6k", Color::White);
        let record = state.apply_move_str("b8", "a7").unwrap();
        let feedback = advisor().analyze_move(&state, &record).unwrap();
        assert!(feedback.contains(&"Warning: Your king is in danger!".to_string()));
        assert!(feedback.contains(&"Careful! Your king on a7 can be captured.".to_string()));
    }

    #[test]
    fn test_suggests_better_move() {
        // Queen could have taken a free rook but wandered off instead
        let mut state = game("K7/8/8/3Q4/8/8/3r3k/8", Color::White);
        let record = state.apply_move_str("d5", "a5").unwrap();
        let feedback = advisor().analyze_move(&state, &record).unwrap();
        assert_eq!(
            feedback.last().unwrap(),
            "Try moving d5 to d2 next time for a stronger position."
        );
    }

    #[test]
    fn test_best_move_gets_no_suggestion() {
        let mut state = game("K7/8/8/3Q4/8/8/3r3k/8", Color::White);
        let record = state.apply_move_str("d5", "d2").unwrap();
        let feedback = advisor().analyze_move(&state, &record).unwrap();
        assert!(feedback.is_empty(), "{:?}", feedback);
    }

    #[test]
    fn test_analysis_leaves_state_alone() {
        let mut state = GameState::new();
        let record = state.apply_move_str("b8", "c6").unwrap();
        let snapshot = state.clone();
        advisor().analyze_move(&state, &record).unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_position_before_undoes_capture_and_promotion() {
        let mut state = game("8/4P3/8/8/8/8/8/8", Color::White);
        let start = state.position().clone();
        let record = state.apply_move_str("e7", "e8").unwrap();
        assert_eq!(position_before(state.position(), &record).unwrap(), start);

        let mut state = game("8/8/8/8/8/8/3p4/4R3", Color::Black);
        let start = state.position().clone();
        let record = state.apply_move_str("d2", "e1").unwrap();
        assert_eq!(position_before(state.position(), &record).unwrap(), start);
    }

    #[test]
    fn test_suggestions_fall_back_to_search() {
        let state = game("K7/8/8/3Q4/8/8/3r3k/8", Color::White);
        let mut advisor = advisor();
        assert_eq!(advisor.suggestions(&state), vec!["Consider moving d5 to d2!"]);
    }

    #[test]
    fn test_suggestions_repeat_last_feedback() {
        // The d4 pawn covers c3
        let mut state = game("K7/8/8/8/3p4/8/8/1N5k", Color::White);
        let record = state.apply_move_str("b1", "c3").unwrap();
        let mut advisor = advisor();
        let feedback = advisor.analyze_move(&state, &record).unwrap();
        assert!(!feedback.is_empty());
        assert_eq!(advisor.suggestions(&state), feedback);
        assert_eq!(advisor.last_feedback(), feedback.as_slice());
    }

    #[test]
    fn test_keep_going_when_nothing_to_suggest() {
        let state = game("8/8/8/8/8/8/8/7k", Color::White);
        assert_eq!(advisor().suggestions(&state), vec!["Keep going!"]);
    }

    #[test]
    fn test_move_hint_text() {
        assert_eq!(move_hint("e2", "e4"), "moving e2 to e4");
    }
}
