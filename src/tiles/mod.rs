//! Tiles and the containers they move between.
//!
//! Tiles are records in a `TileArena`; the bag and racks hold `TileId`
//! handles. A tile's `TileLocation` is its single source of truth for where it
//! is, and tiles only ever move Bag -> Rack -> Board.
//!
//! ## Key Types
//!
//! - `Tile`: letter, points and location of one tile
//! - `TileArena`: owns every tile of a game
//! - `Bag`: the undrawn pool with the game's RNG
//! - `Rack`: a player's held tiles and the commit of a placement

pub mod tile;
pub mod arena;
pub mod bag;
pub mod rack;

pub use tile::{parse_letters, Tile, TileLocation, BLANK};
pub use arena::TileArena;
pub use bag::Bag;
pub use rack::{Rack, RackView};
