//! Arena owning every tile of a game.
//!
//! The `TileArena` allocates tiles densely and tracks where each one is via
//! its `TileLocation`. It supports:
//! - Creating tiles from a `TileDistribution`
//! - Lookup by `TileId`
//! - Moving tiles between locations
//! - Counting tiles per location (for conservation checks)

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileLocation};
use crate::core::{TileDistribution, TileId};

/// Owns all tiles of a game.
///
/// ```
/// use rust_scrabble::tiles::{TileArena, TileLocation};
///
/// let mut arena = TileArena::new();
/// let id = arena.create('Z', 10);
///
/// assert_eq!(arena[id].letter(), 'Z');
/// assert_eq!(arena.move_to(id, TileLocation::Rack), Some(TileLocation::Bag));
/// assert_eq!(arena.count_in(TileLocation::Rack), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileArena {
    tiles: Vec<Tile>,
}

impl TileArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one tile per unit of `distribution`, all in the bag.
    #[must_use]
    pub fn from_distribution(distribution: &TileDistribution) -> Self {
        let mut arena = Self::new();
        for spec in &distribution.letters {
            for _ in 0..spec.count {
                arena.create(spec.letter, spec.points);
            }
        }
        arena
    }

    /// Allocate a new tile in the bag.
    pub fn create(&mut self, letter: char, points: u32) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile::new(id, letter, points));
        id
    }

    /// Look up a tile.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    /// Move a tile to a new location.
    ///
    /// Returns the old location, or `None` if the tile doesn't exist.
    pub fn move_to(&mut self, id: TileId, location: TileLocation) -> Option<TileLocation> {
        let tile = self.get_mut(id)?;
        let old = tile.location();
        tile.set_location(location);
        Some(old)
    }

    /// Number of tiles currently at `location`.
    #[must_use]
    pub fn count_in(&self, location: TileLocation) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.location() == location)
            .count()
    }

    /// Ids of tiles currently at `location`, in allocation order.
    pub fn ids_in(&self, location: TileLocation) -> impl Iterator<Item = TileId> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.location() == location)
            .map(|tile| tile.id)
    }

    /// Ids of every tile, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().map(|tile| tile.id)
    }

    /// Total tiles in the game.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

impl Index<TileId> for TileArena {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Self::Output {
        &self.tiles[id.index()]
    }
}
