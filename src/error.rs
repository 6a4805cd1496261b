use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("Terminal too small! Need at least {need_width}x{need_height} (have {width}x{height})")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        need_width: u16,
        need_height: u16,
    },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot create log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
