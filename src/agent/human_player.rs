//! Human player that reads moves from a text stream.
//!
//! Input is one move per line, either `e2 e4` or `e2e4`. A few commands are
//! understood as well:
//!
//! - `hint` prints the advisor's suggestions for the current position
//! - `board` prints the board again
//! - `quit` gives up the game
//!
//! # Control Flow
//!
//! ```text
//! Orchestrator::step()
//!     ↓
//! player.get_move(state)   (prints board, prompts, loops until a move or quit)
//!     ↓
//! GameState::apply_move()
//!     ↓
//! player.move_rejected()   (if refused, prints the reason)
//! ```

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::advisor::Advisor;
use crate::agent::player::{GameResult, Player};
use crate::config::Difficulty;
use crate::game_repr::{Move, Square};
use crate::game_state::{GameState, MoveRecord};

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Hint,
    Board,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "hint" | "h" => return Some(Command::Hint),
            "board" | "b" => return Some(Command::Board),
            "quit" | "q" | "exit" => return Some(Command::Quit),
            _ => {}
        }

        let squares: Vec<&str> = if line.contains(char::is_whitespace) {
            line.split_whitespace().collect()
        } else if line.len() == 4 && line.is_ascii() {
            vec![&line[..2], &line[2..]]
        } else {
            return None;
        };
        match squares.as_slice() {
            [from, to] => {
                let from = Square::from_algebraic(from).ok()?;
                let to = Square::from_algebraic(to).ok()?;
                Some(Command::Move(Move::new(from, to)))
            }
            _ => None,
        }
    }
}

/// Where a [`HumanPlayer`] reads its lines from.
pub trait LineSource {
    /// Append one line to `buf`; `Ok(0)` at end of input.
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Locks stdin per line, so several console players can share it.
impl LineSource for io::Stdin {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

impl<R: io::Read> LineSource for io::BufReader<R> {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
    advisor: Advisor<StdRng>,
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// `hint_level` sets how deep the advisor searches for hints; `seed`
    /// fixes its tie-break, `None` draws from system entropy.
    pub fn new(
        input: R,
        output: W,
        name: impl Into<String>,
        hint_level: Difficulty,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            input,
            output,
            name: name.into(),
            advisor: Advisor::new(hint_level.depth(), rng),
        }
    }

    /// Console output failures are not fatal to the game.
    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.next_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    /// Blocks until a well-formed move is typed. End of input counts as quit.
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let board = state.position().to_string();
        self.say(&board);
        loop {
            let _ = write!(self.output, "{} to move ({}): ", state.turn(), self.name);
            let _ = self.output.flush();

            let line = self.read_line()?;
            match Command::parse(&line) {
                Some(Command::Move(mv)) => return Some(mv),
                Some(Command::Quit) => return None,
                Some(Command::Board) => self.say(&board),
                Some(Command::Hint) => {
                    for hint in self.advisor.suggestions(state) {
                        self.say(&hint);
                    }
                }
                None => self.say("Enter a move like e2 e4, or hint, board, quit."),
            }
        }
    }

    fn move_rejected(&mut self, _mv: Move, reason: &str) {
        self.say(reason);
    }

    fn opponent_moved(&mut self, record: &MoveRecord) {
        let text = format!("Opponent played {} -> {}", record.from, record.to);
        self.say(&text);
    }

    /// Coaching on our own move, shown right after it is applied.
    fn own_move_applied(&mut self, state: &GameState, record: &MoveRecord) {
        if let Ok(feedback) = self.advisor.analyze_move(state, record) {
            for line in feedback {
                self.say(&line);
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        let text = format!("Game over: {:?}", result);
        self.say(&text);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
