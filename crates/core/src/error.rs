//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing Trello credential: {0}")]
    MissingCredential(&'static str),

    #[error("Trello request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Trello returned status {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Column range [{start}, {stop}) starts after it stops")]
    ReversedRange { start: usize, stop: usize },

    #[error("Column range [{start}, {stop}) is out of bounds for a board with {len} lists")]
    RangeOutOfBounds { start: usize, stop: usize, len: usize },
}
