use crate::grid::Direction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
    Restart,
}

impl Command {
    pub fn from_key_event(key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Steer(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Steer(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Steer(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Steer(Direction::Right)),
            KeyCode::Char('q' | 'Q') => Some(Command::Quit),
            KeyCode::Char('r' | 'R') => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Read every key press already buffered, without blocking.
pub fn pending_commands() -> io::Result<Vec<Command>> {
    let mut commands = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(command) = read_command()? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Block until the next event and map it, if it is a key we know.
pub fn read_command() -> io::Result<Option<Command>> {
    match event::read()? {
        Event::Key(key) => Ok(Command::from_key_event(key)),
        _ => Ok(None),
    }
}
