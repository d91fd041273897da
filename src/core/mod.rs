//! Core engine types: ids, players, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module leans on.
//! Games are configured via `GameConfig` rather than by modifying the core.

pub mod ids;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::TileId;
pub use player::{Player, PlayerId, PlayerMap, PlayerView, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{GameConfig, LetterSpec, TileDistribution};
pub use error::{ConfigError, GameError, PlayError};
