//! Error kinds.
//!
//! Every `PlayError` is an expected rule violation: the caller re-prompts the
//! same player and nothing on the board, racks or bag has changed.

use thiserror::Error;

/// A rejected placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("direction must be 'h' or 'v', got {0:?}")]
    InvalidDirection(char),

    #[error("the first word of the game must cover the centre square")]
    CenterNotCovered,

    #[error("a word must touch a tile already on the board")]
    DisconnectedPlay,

    #[error("square ({row}, {col}) holds {found:?}, cannot place {expected:?}")]
    ConflictingTile {
        row: usize,
        col: usize,
        expected: char,
        found: char,
    },

    #[error("no tile for {0:?} in the rack")]
    TileNotInRack(char),

    #[error("square ({row}, {col}) is already occupied")]
    OccupiedSquare { row: usize, col: usize },

    #[error("tiles must be given as letters A-Z, got {0:?}")]
    InvalidLetters(String),

    #[error("the placement does not add any tile to the board")]
    NoNewTiles,
}

/// A game configuration that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game seats 1 to 4 players, got {0}")]
    PlayerCount(usize),

    #[error("rack size must be between 1 and 15, got {0}")]
    RackSize(usize),

    #[error("tile distribution is empty")]
    EmptyDistribution,

    #[error("letter {0:?} appears twice in the tile distribution")]
    DuplicateLetter(char),

    #[error("{0:?} is not a letter or the blank marker")]
    InvalidLetter(char),
}

/// Failure of a turn-loop operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Play(#[from] PlayError),

    #[error("the game is over")]
    GameOver,
}
