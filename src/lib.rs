//! # rust-scrabble
//!
//! Rules engine for a 15x15 tile-placement word game with 1-4 local players.
//!
//! ## Design Principles
//!
//! 1. **Arena Tiles**: Every tile is a record in a `TileArena` addressed by
//!    `TileId`. Bag, racks and board squares hold handles; a tile's
//!    `TileLocation` says where it is.
//!
//! 2. **All-or-Nothing Turns**: `Play::validate` only reads the board and
//!    `Rack::place_tile_str` either commits every tile or none.
//!
//! 3. **Premiums Count Once**: A square's multiplier applies only on the turn
//!    its tile is placed.
//!
//! 4. **No I/O**: Rendering and auditing go through an injected `Presenter`.
//!
//! ## Modules
//!
//! - `core`: Tile and player ids, RNG, configuration, errors
//! - `board`: Squares, premium layout, the grid
//! - `tiles`: Tiles, arena, bag, rack
//! - `rules`: Validation, word tracing, scoring
//! - `game`: The shared turn loop

pub mod core;
pub mod board;
pub mod tiles;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    TileId, PlayerId, PlayerMap, Player,
    GameRng,
    GameConfig, LetterSpec, TileDistribution,
    PlayError, ConfigError, GameError,
};

pub use crate::board::{Board, Direction, Multiplier, Position, Square, BOARD_SIZE, CENTER};

pub use crate::tiles::{Bag, Rack, Tile, TileArena, TileLocation, BLANK};

pub use crate::rules::{Play, PlayState, ScoringRules, Word, WordTile};

pub use crate::game::{Game, GameResult, NullPresenter, Presenter, TracingPresenter, TurnInput};
