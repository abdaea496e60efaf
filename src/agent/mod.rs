pub mod player;
pub use player::*;

pub mod human_player;
pub use human_player::{Command, HumanPlayer, LineSource};

pub mod ai_player;
pub use ai_player::AiPlayer;

pub mod ai;
pub use ai::SearchResult;
