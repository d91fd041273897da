//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - `TileDistribution`: which letters exist, how many, and their points
//! - `GameConfig`: players, rack size, bingo bonus, RNG seed and distribution
//!
//! Both are serde types so a front end can load them from any format.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::MAX_PLAYERS;
use crate::board::BOARD_SIZE;
use crate::tiles::BLANK;

/// One letter of a tile set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSpec {
    /// `A`-`Z`, or `BLANK`.
    pub letter: char,
    /// Number of tiles carrying this letter.
    pub count: u32,
    /// Face value of each tile.
    pub points: u32,
}

impl LetterSpec {
    #[must_use]
    pub const fn new(letter: char, count: u32, points: u32) -> Self {
        Self {
            letter,
            count,
            points,
        }
    }
}

/// The standard English set: 98 lettered tiles and 2 blanks.
const STANDARD_ENGLISH: [LetterSpec; 27] = [
    LetterSpec::new('A', 9, 1),
    LetterSpec::new('B', 2, 3),
    LetterSpec::new('C', 2, 3),
    LetterSpec::new('D', 4, 2),
    LetterSpec::new('E', 12, 1),
    LetterSpec::new('F', 2, 4),
    LetterSpec::new('G', 3, 2),
    LetterSpec::new('H', 2, 4),
    LetterSpec::new('I', 9, 1),
    LetterSpec::new('J', 1, 8),
    LetterSpec::new('K', 1, 5),
    LetterSpec::new('L', 4, 1),
    LetterSpec::new('M', 2, 3),
    LetterSpec::new('N', 6, 1),
    LetterSpec::new('O', 8, 1),
    LetterSpec::new('P', 2, 3),
    LetterSpec::new('Q', 1, 10),
    LetterSpec::new('R', 6, 1),
    LetterSpec::new('S', 4, 1),
    LetterSpec::new('T', 6, 1),
    LetterSpec::new('U', 4, 1),
    LetterSpec::new('V', 2, 4),
    LetterSpec::new('W', 2, 4),
    LetterSpec::new('X', 1, 8),
    LetterSpec::new('Y', 2, 4),
    LetterSpec::new('Z', 1, 10),
    LetterSpec::new(BLANK, 2, 0),
];

/// Letter counts and point values for a game's tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDistribution {
    pub letters: Vec<LetterSpec>,
}

impl TileDistribution {
    /// Build a distribution from explicit letter specs.
    pub fn new(letters: impl IntoIterator<Item = LetterSpec>) -> Self {
        Self {
            letters: letters.into_iter().collect(),
        }
    }

    /// The standard 100-tile English distribution.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_ENGLISH)
    }

    /// Total number of tiles this distribution creates.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.letters.iter().map(|spec| spec.count as usize).sum()
    }

    /// Face value of a letter, if the distribution has it.
    #[must_use]
    pub fn points_for(&self, letter: char) -> Option<u32> {
        self.letters
            .iter()
            .find(|spec| spec.letter == letter)
            .map(|spec| spec.points)
    }

    /// Check letters are valid and unique, and that at least one tile exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for spec in &self.letters {
            if !(spec.letter.is_ascii_uppercase() || spec.letter == BLANK) {
                return Err(ConfigError::InvalidLetter(spec.letter));
            }
            if !seen.insert(spec.letter) {
                return Err(ConfigError::DuplicateLetter(spec.letter));
            }
        }
        if self.total_tiles() == 0 {
            return Err(ConfigError::EmptyDistribution);
        }
        Ok(())
    }
}

impl Default for TileDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seat names in turn order (1-4 players).
    pub player_names: Vec<String>,

    /// Tiles held by a full rack.
    pub rack_size: usize,

    /// Bonus for placing a full rack in one turn.
    pub bingo_bonus: u32,

    /// Seed for the bag's draws. Same seed, same game.
    pub seed: u64,

    /// Letters in the bag at the start.
    pub distribution: TileDistribution,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Solitaire unless players are added.
            player_names: vec!["1".to_string()],
            rack_size: 7,
            bingo_bonus: 50,
            seed: 42,
            distribution: TileDistribution::standard(),
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the seated players.
    #[must_use]
    pub fn with_players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rack size.
    #[must_use]
    pub fn with_rack_size(mut self, rack_size: usize) -> Self {
        self.rack_size = rack_size;
        self
    }

    /// Set the bingo bonus.
    #[must_use]
    pub fn with_bingo_bonus(mut self, bonus: u32) -> Self {
        self.bingo_bonus = bonus;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the tile distribution.
    #[must_use]
    pub fn with_distribution(mut self, distribution: TileDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let players = self.player_count();
        if players == 0 || players > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(players));
        }
        if self.rack_size == 0 || self.rack_size > BOARD_SIZE {
            return Err(ConfigError::RackSize(self.rack_size));
        }
        self.distribution.validate()
    }
}
