use std::io;

use thiserror::Error;

// Why reading the next guess stopped short of a number
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read guess: {0}")]
    Io(#[from] io::Error),

    #[error("`{token}` is not a number")]
    Malformed { token: String },
}

// Failures while driving a game; only the output side can fail hard
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to write to output: {0}")]
    Output(#[from] io::Error),
}
