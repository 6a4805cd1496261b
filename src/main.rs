mod consts;
mod error;
mod food;
mod game;
mod grid;
mod haus;
mod input;
mod render;
mod snek;
mod tui;

use crate::consts::{LOG_FILE, LOG_LEVEL};
use crate::error::SnakeError;
use crate::game::Game;
use crate::tui::Tui;
use log::{error, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

/// What to tell the player on the way out, and where.
#[derive(Debug, PartialEq)]
enum Report {
    Stdout(String),
    Stderr(String),
}

fn report(result: &Result<u32, SnakeError>) -> (Report, u8) {
    match result {
        Ok(score) => (
            Report::Stdout(format!("Thanks for playing! Final Score: {}", score)),
            0,
        ),
        Err(e @ SnakeError::TerminalTooSmall { .. }) => (Report::Stdout(e.to_string()), 1),
        Err(e) => (Report::Stderr(e.to_string()), 1),
    }
}

fn main() -> ExitCode {
    let result = run();
    if let Err(e) = &result {
        error!("{}", e);
    }

    let (message, code) = report(&result);
    match message {
        Report::Stdout(text) => println!("{}", text),
        Report::Stderr(text) => eprintln!("{}", text),
    }
    ExitCode::from(code)
}

fn init_logging(path: &Path) -> Result<(), SnakeError> {
    let file = File::create(path).map_err(|source| SnakeError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(LOG_LEVEL, Config::default(), file)?;
    Ok(())
}

fn run() -> Result<u32, SnakeError> {
    // Set up logging before anything else; the screen belongs to the game
    if let Err(e) = init_logging(Path::new(LOG_FILE)) {
        eprintln!("{}; playing without a log", e);
    }

    info!("Starting termsnake");

    let mut tui = Tui::enter()?;
    let mut game = Game::new();
    let score = game.run(&mut tui.terminal)?;
    drop(tui);

    info!("Exiting with final score {}", score);
    Ok(score)
}
