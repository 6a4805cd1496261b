//! Terminal setup and teardown around the game.
use crate::consts::{MIN_TERM_HEIGHT, MIN_TERM_WIDTH};
use crate::error::SnakeError;
use crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Fail unless a `width` x `height` terminal fits the board and its rows.
pub fn check_size(width: u16, height: u16) -> Result<(), SnakeError> {
    if width < MIN_TERM_WIDTH || height < MIN_TERM_HEIGHT {
        return Err(SnakeError::TerminalTooSmall {
            width,
            height,
            need_width: MIN_TERM_WIDTH,
            need_height: MIN_TERM_HEIGHT,
        });
    }
    Ok(())
}

/// A raw-mode, alternate-screen terminal. Restored on drop, so the shell
/// gets its terminal back on every exit path.
pub struct Tui<W: Write = Stdout> {
    pub terminal: Terminal<CrosstermBackend<W>>,
}

impl Tui<Stdout> {
    pub fn enter() -> Result<Self, SnakeError> {
        let (width, height) = terminal::size()?;
        check_size(width, height)?;

        let tui = Tui::take_over(Terminal::new(CrosstermBackend::new(io::stdout()))?)?;
        info!("Terminal ready ({}x{})", width, height);
        Ok(tui)
    }
}

impl<W: Write> Tui<W> {
    /// The guard exists before the first terminal change, so a failure part
    /// way through still undoes whatever was switched on.
    fn take_over(terminal: Terminal<CrosstermBackend<W>>) -> Result<Self, SnakeError> {
        let mut tui = Tui { terminal };
        execute!(
            tui.terminal.backend_mut(),
            EnterAlternateScreen,
            cursor::Hide
        )?;
        enable_raw_mode()?;
        Ok(tui)
    }

    fn restore(&mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
        let cursor = self.terminal.show_cursor();
        raw.and(screen).and(cursor)
    }
}

impl<W: Write> Drop for Tui<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}
