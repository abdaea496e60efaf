//! Saved-game format and file helpers.
//!
//! A saved game is a JSON document with the full board grid, the side to
//! move and the move history:
//!
//! ```json
//! {"board": [[{"color": "w", "code": "R"}, null, ...], ...],
//!  "turn": "w",
//!  "moveHistory": [{"from": "b8", "to": "c6", "piece": "N", "captured": null}]}
//! ```
//!
//! Row 0 of `board` is rank 8. `move_history` is accepted in place of
//! `moveHistory` when reading.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ChessError;
use crate::game_repr::{Color, Piece, Position, Square};
use crate::game_state::{GameState, MoveRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPiece {
    pub color: String,
    pub code: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Vec<Vec<Option<SavedPiece>>>,
    pub turn: String,
    #[serde(rename = "moveHistory", alias = "move_history", default)]
    pub move_history: Vec<MoveRecord>,
}

impl From<&GameState> for SavedGame {
    fn from(state: &GameState) -> Self {
        let board = (0..8u8)
            .map(|row| {
                (0..8u8)
                    .map(|col| {
                        state
                            .position()
                            .piece_at(Square::new(row, col))
                            .map(|p| SavedPiece {
                                color: p.color.code().to_string(),
                                code: p.code(),
                            })
                    })
                    .collect()
            })
            .collect();
        SavedGame {
            board,
            turn: state.turn().code().to_string(),
            move_history: state.history().to_vec(),
        }
    }
}

impl TryFrom<SavedGame> for GameState {
    type Error = ChessError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        if saved.board.len() != 8 {
            return Err(ChessError::Persistence(format!(
                "board has {} rows",
                saved.board.len()
            )));
        }

        let mut position = Position::empty();
        for (row, cells) in saved.board.iter().enumerate() {
            if cells.len() != 8 {
                return Err(ChessError::Persistence(format!(
                    "board row {} has {} cells",
                    row,
                    cells.len()
                )));
            }
            for (col, cell) in cells.iter().enumerate() {
                let Some(saved_piece) = cell else { continue };
                let square = Square::new(row as u8, col as u8);
                let piece = Piece::from_code(saved_piece.code, square)
                    .map_err(|e| ChessError::Persistence(e.to_string()))?;
                if Color::from_code(&saved_piece.color) != Some(piece.color) {
                    return Err(ChessError::Persistence(format!(
                        "piece {} on {} is marked {:?}",
                        saved_piece.code, square, saved_piece.color
                    )));
                }
                position.set_piece(square, Some(piece));
            }
        }

        let turn = Color::from_code(&saved.turn).ok_or_else(|| {
            ChessError::Persistence(format!("unknown side to move {:?}", saved.turn))
        })?;

        Ok(GameState::from_parts(position, turn, saved.move_history))
    }
}

impl GameState {
    pub fn to_json(&self) -> Result<String, ChessError> {
        Ok(serde_json::to_string(&SavedGame::from(self))?)
    }

    pub fn from_json(json: &str) -> Result<GameState, ChessError> {
        let saved: SavedGame = serde_json::from_str(json)?;
        GameState::try_from(saved)
    }

    /// Like [`GameState::from_json`], but malformed input yields a new game.
    pub fn from_json_or_reset(json: &str) -> GameState {
        GameState::from_json(json).unwrap_or_else(|e| {
            warn!("discarding saved game: {}", e);
            GameState::new()
        })
    }
}

pub fn save(state: &GameState, path: impl AsRef<Path>) -> Result<(), ChessError> {
    fs::write(path, state.to_json()?)?;
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<GameState, ChessError> {
    let json = fs::read_to_string(path)?;
    GameState::from_json(&json)
}

/// Load a saved game, starting over if the file is missing or unreadable.
pub fn load_or_reset(path: impl AsRef<Path>) -> GameState {
    let path = path.as_ref();
    match load(path) {
        Ok(state) => state,
        Err(ChessError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => GameState::new(),
        Err(e) => {
            warn!("could not load {}: {}", path.display(), e);
            GameState::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trip_mid_game() {
        let mut state = GameState::new();
        state.apply_move_str("b8", "c6").unwrap();
        state.apply_move_str("g1", "f3").unwrap();

        let restored = GameState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_document_shape() {
        let mut state = GameState::new();
        state.apply_move_str("b8", "c6").unwrap();
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();

        assert_eq!(value["turn"], "b");
        assert_eq!(value["board"][0][0], json!({"color": "w", "code": "R"}));
        assert_eq!(value["board"][3][3], serde_json::Value::Null);
        assert_eq!(
            value["moveHistory"][0],
            json!({"from": "b8", "to": "c6", "piece": "N", "captured": null})
        );
    }

    #[test]
    fn test_snake_case_history_alias() {
        let mut value: serde_json::Value =
            serde_json::from_str(&GameState::new().to_json().unwrap()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("moveHistory");
        object.insert(
            "move_history".to_string(),
            json!([{"from": "g8", "to": "f6", "piece": "N", "captured": null}]),
        );

        let state = GameState::from_json(&value.to_string()).unwrap();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].to, Square::from_algebraic("f6").unwrap());
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        assert!(GameState::from_json("not json").is_err());
        assert!(GameState::from_json(r#"{"board": [], "turn": "w"}"#).is_err());

        let mut value: serde_json::Value =
            serde_json::from_str(&GameState::new().to_json().unwrap()).unwrap();
        value["turn"] = json!("x");
        assert!(GameState::from_json(&value.to_string()).is_err());

        value["turn"] = json!("w");
        value["board"][4][4] = json!({"color": "w", "code": "Z"});
        assert!(GameState::from_json(&value.to_string()).is_err());

        value["board"][4][4] = json!({"color": "b", "code": "Q"});
        assert!(matches!(
            GameState::from_json(&value.to_string()),
            Err(ChessError::Persistence(_))
        ));
    }

    #[test]
    fn test_reset_fallback() {
        let mut state = GameState::new();
        state.apply_move_str("b8", "c6").unwrap();
        assert_eq!(GameState::from_json_or_reset("{broken"), GameState::new());
        assert_eq!(
            GameState::from_json_or_reset(&state.to_json().unwrap()),
            state
        );
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("chess_coach_save_{}.json", std::process::id()));
        let mut state = GameState::new();
        state.apply_move_str("g8", "h6").unwrap();

        save(&state, &path).unwrap();
        assert_eq!(load(&path).unwrap(), state);
        assert_eq!(load_or_reset(&path), state);

        fs::write(&path, "[]").unwrap();
        assert_eq!(load_or_reset(&path), GameState::new());
        fs::remove_file(&path).unwrap();

        assert_eq!(load_or_reset(&path), GameState::new());
    }
}
