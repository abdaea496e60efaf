//! Game configuration.
//!
//! A [`GameConfig`] holds everything needed to start a session: who plays
//! each side, how deep the computer searches, where the game is saved and
//! how the tie-break generator is seeded.

use std::path::PathBuf;

use crate::error::ChessError;
use crate::game_repr::Color;

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 1: grabs whatever is loose
    Easy,
    /// Depth 2: also sees the immediate reply
    #[default]
    Medium,
    /// Depth 3
    Hard,
}

impl Difficulty {
    /// Search depth in plies
    pub fn depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Moves typed on standard input
    Human,
    /// Computer player with specified difficulty
    Ai { difficulty: Difficulty },
}

impl PlayerConfig {
    /// `human` or a difficulty name.
    pub fn parse(text: &str) -> Result<Self, ChessError> {
        if text.eq_ignore_ascii_case("human") {
            return Ok(PlayerConfig::Human);
        }
        Difficulty::from_name(text)
            .map(|difficulty| PlayerConfig::Ai { difficulty })
            .ok_or_else(|| ChessError::Config(format!("unknown player kind {:?}", text)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white: PlayerConfig,
    /// Configuration for the Black player
    pub black: PlayerConfig,
    /// Saved after every move when set, and loaded on start
    pub save_path: Option<PathBuf>,
    /// Seed for the tie-break generator; entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many plies
    pub max_plies: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvai(Color::White, Difficulty::default())
    }
}

impl GameConfig {
    fn with_players(white: PlayerConfig, black: PlayerConfig) -> Self {
        Self {
            white,
            black,
            save_path: None,
            seed: None,
            max_plies: None,
        }
    }

    /// Two humans
    pub fn pvp() -> Self {
        Self::with_players(PlayerConfig::Human, PlayerConfig::Human)
    }

    /// One human, one computer
    pub fn pvai(user_color: Color, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::Ai {
            difficulty: ai_difficulty,
        };
        match user_color {
            Color::White => Self::with_players(PlayerConfig::Human, ai),
            Color::Black => Self::with_players(ai, PlayerConfig::Human),
        }
    }

    /// Two computers
    pub fn aivai(white_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self::with_players(
            PlayerConfig::Ai {
                difficulty: white_difficulty,
            },
            PlayerConfig::Ai {
                difficulty: black_difficulty,
            },
        )
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Build from command-line arguments (program name already stripped).
    ///
    /// Recognised: `--white KIND`, `--black KIND`, `--seed N`,
    /// `--save PATH`, `--max-plies N`, where KIND is `human`, `easy`,
    /// `medium` or `hard`.
    pub fn from_args<I, S>(args: I) -> Result<Self, ChessError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| ChessError::Config(format!("{} needs a value", flag)))
            };
            match flag.as_str() {
                "--white" => config.white = PlayerConfig::parse(&value()?)?,
                "--black" => config.black = PlayerConfig::parse(&value()?)?,
                "--seed" => config.seed = Some(parse_number(&value()?)?),
                "--save" => config.save_path = Some(PathBuf::from(value()?)),
                "--max-plies" => config.max_plies = Some(parse_number(&value()?)?),
                other => return Err(ChessError::Config(format!("unknown argument {:?}", other))),
            }
        }
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, ChessError> {
    text.parse()
        .map_err(|_| ChessError::Config(format!("expected a number, got {:?}", text)))
}
