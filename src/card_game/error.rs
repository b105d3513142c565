use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a draw request is rejected. Checked in declaration order.
///
/// The messages are the ones shown to the user in the error alert.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a player")]
    NoPlayerSelected,
    #[error("Please select a valid number of cards")]
    InvalidCardCount { requested: i64 },
    #[error("Not enough cards in deck")]
    InsufficientCards { requested: i64, available: usize },
}

/// A label that names no card type or roster player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown card type: {0}")]
    UnknownCardType(String),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
}

/// Errors outside draw validation: selection, config and export.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
