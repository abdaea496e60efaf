use std::process::ExitCode;

use env_logger::Env;
use log::error;

use chess_coach::agent::GameResult;
use chess_coach::{persistence, GameConfig, GameState, Orchestrator};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!(
                "usage: chess_coach [--white KIND] [--black KIND] [--seed N] [--save PATH] [--max-plies N]"
            );
            eprintln!("       KIND is human, easy, medium or hard");
            return ExitCode::FAILURE;
        }
    };

    let state = match &config.save_path {
        Some(path) => persistence::load_or_reset(path),
        None => GameState::new(),
    };

    let mut game = Orchestrator::from_config(&config, state);
    let result = game.run();

    println!("{}", game.state().position());
    match result {
        GameResult::WhiteWins => println!("White wins."),
        GameResult::BlackWins => println!("Black wins."),
        GameResult::NoMoves(color) => println!("{} has no moves left.", color),
        GameResult::Abandoned(color) => println!("{} left the game.", color),
        GameResult::PlyLimit => println!("Stopped after {} plies.", game.plies()),
    }
    ExitCode::SUCCESS
}
