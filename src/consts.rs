//! Hard-coded configuration for the board, timing and glyphs.
use log::LevelFilter;
use ratatui::symbols::border;
use std::time::Duration;

/// Playable columns. Cells are numbered `1..=GRID_WIDTH`.
pub const GRID_WIDTH: u16 = 40;

/// Playable rows. Cells are numbered `1..=GRID_HEIGHT`.
pub const GRID_HEIGHT: u16 = 20;

/// Time between movements of the snake
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Points awarded for each piece of food
pub const FOOD_REWARD: u32 = 10;

/// Smallest terminal the board, score and help rows fit into
pub const MIN_TERM_WIDTH: u16 = GRID_WIDTH + 2;
pub const MIN_TERM_HEIGHT: u16 = GRID_HEIGHT + 6;

/// Screen rows (0-based) below the board
pub const SCORE_ROW: u16 = GRID_HEIGHT + 3;
pub const HELP_ROW: u16 = GRID_HEIGHT + 4;

pub const HEAD_SYMBOL: &str = "O";
pub const TAIL_SYMBOL: &str = "o";
pub const FOOD_SYMBOL: &str = "F";

pub const BOARD_BORDER: border::Set = border::Set {
    top_left: "#",
    top_right: "#",
    bottom_left: "#",
    bottom_right: "#",
    vertical_left: "#",
    vertical_right: "#",
    horizontal_top: "#",
    horizontal_bottom: "#",
};

pub const HELP_TEXT: &str = "Use WASD or Arrow keys. Press 'q' to quit.";
pub const RESTART_TEXT: &str = "Press 'r' to Restart or 'q' to Quit";

pub const LOG_FILE: &str = "termsnake.log";
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
