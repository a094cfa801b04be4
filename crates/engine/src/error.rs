use std::io;

use thiserror::Error;

/// Result type for the engine crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Fatal conditions. Every one of these ends the game.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to render frame: {0}")]
    Render(#[source] io::Error),
    #[error("keyboard input failed: {0}")]
    Keyboard(#[source] io::Error),
    #[error("input channel closed before quit")]
    InputClosed,
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),
    #[error("failed to open log file `{path}`: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },
}
