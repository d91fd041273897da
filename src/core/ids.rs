//! Tile identification.
//!
//! Every tile in a game is a record in the `TileArena`, addressed by a stable
//! `TileId`. Containers (bag, racks, board squares) hold `TileId` handles, never
//! the tiles themselves, so a tile can migrate between containers without any
//! ownership juggling.
//!
//! ## ID Layout
//!
//! IDs are allocated densely from 0 in the order tiles are created, so a
//! `TileId` doubles as an index into the arena.
//!
//! ```
//! use rust_scrabble::core::TileId;
//!
//! let first = TileId::new(0);
//! assert_eq!(first.index(), 0);
//! assert_eq!(format!("{}", TileId(42)), "Tile(42)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile instance.
///
/// Two tiles showing the same letter still have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this tile in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
