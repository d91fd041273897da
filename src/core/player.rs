//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. A game seats 1-4 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## Player
//!
//! Name, running score, rack and turn flag for one seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::tiles::{Rack, TileArena};

/// Most players a single game seats.
pub const MAX_PLAYERS: usize = 4;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player seated after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_scrabble::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_scrabble::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// scores[PlayerId::new(1)] += 12;
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Panics unless `1 <= player_count <= MAX_PLAYERS`; `GameConfig::validate`
    /// rejects bad counts before a game ever gets here.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {MAX_PLAYERS} players supported"
        );

        let data = (0..player_count as u8).map(PlayerId).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the stored values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    score: u32,
    pub rack: Rack,
    on_turn: bool,
}

impl Player {
    /// Create a player with an empty rack and no points.
    pub fn new(id: PlayerId, name: impl Into<String>, rack_size: usize) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            rack: Rack::new(rack_size),
            on_turn: false,
        }
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add the points of a committed play.
    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Is it this player's turn?
    #[must_use]
    pub fn is_on_turn(&self) -> bool {
        self.on_turn
    }

    /// Flip the turn flag.
    pub fn toggle_turn(&mut self) {
        self.on_turn = !self.on_turn;
    }

    /// Summary line including the rack letters.
    #[must_use]
    pub fn show<'a>(&'a self, tiles: &'a TileArena) -> PlayerView<'a> {
        PlayerView { player: self, tiles }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// Render helper pairing a player with the arena its rack points into.
pub struct PlayerView<'a> {
    player: &'a Player,
    tiles: &'a TileArena,
}

impl std::fmt::Display for PlayerView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.player,
            self.player.rack.show(self.tiles)
        )
    }
}
