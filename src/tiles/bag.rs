//! The undrawn tile pool.
//!
//! The bag owns the game's only RNG. Draws pick uniformly at random without
//! replacement, and a short bag simply yields a short draw.

use tracing::debug;

use super::arena::TileArena;
use super::tile::TileLocation;
use crate::core::{GameRng, TileId};

/// Undrawn tiles plus the random source that draws them.
#[derive(Clone, Debug)]
pub struct Bag {
    tiles: Vec<TileId>,
    rng: GameRng,
}

impl Bag {
    /// Put every tile the arena holds in the bag into a new pool.
    #[must_use]
    pub fn new(tiles: &TileArena, mut rng: GameRng) -> Self {
        let mut pool: Vec<TileId> = tiles.ids_in(TileLocation::Bag).collect();
        rng.shuffle(&mut pool);
        Self { tiles: pool, rng }
    }

    /// Build a pool from explicit tiles, which must already be in the bag.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = TileId>, rng: GameRng) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            rng,
        }
    }

    /// Draw up to `n` tiles, moving them to the rack location.
    ///
    /// Returns fewer than `n` tiles (possibly none) when the bag runs short.
    pub fn draw(&mut self, n: usize, arena: &mut TileArena) -> Vec<TileId> {
        let count = n.min(self.tiles.len());
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.rng.gen_range_usize(0..self.tiles.len());
            let id = self.tiles.swap_remove(idx);
            arena.move_to(id, TileLocation::Rack);
            drawn.push(id);
        }
        debug!(requested = n, drawn = drawn.len(), remaining = self.tiles.len(), "drew tiles");
        drawn
    }

    /// Current pool size.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Is `id` still in the pool?
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains(&id)
    }
}

impl std::fmt::Display for Bag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tiles left", self.tiles.len())
    }
}
