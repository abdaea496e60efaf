pub mod advisor;
pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod game_state;
pub mod orchestrator;
pub mod persistence;

pub use advisor::Advisor;
pub use config::{Difficulty, GameConfig, PlayerConfig};
pub use error::{ChessError, MoveRejection};
pub use game_repr::{Color, Move, Piece, Position, Square, Type};
pub use game_state::{GameState, MoveRecord};
pub use orchestrator::{Orchestrator, StepOutcome};
