//! A single letter tile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayError, TileId};

/// Letter carried by a blank tile.
pub const BLANK: char = '_';

/// Letters of a placement request, upper-cased.
///
/// Fails with `InvalidLetters` for an empty string or anything outside A-Z.
pub fn parse_letters(letters: &str) -> Result<SmallVec<[char; 15]>, PlayError> {
    let parsed: SmallVec<[char; 15]> = letters.chars().map(|c| c.to_ascii_uppercase()).collect();
    if parsed.is_empty() || !parsed.iter().all(char::is_ascii_uppercase) {
        return Err(PlayError::InvalidLetters(letters.to_string()));
    }
    Ok(parsed)
}

/// Container a tile currently sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileLocation {
    Bag,
    Rack,
    Board,
}

/// One tile instance.
///
/// Letter and points never change. A blank additionally records the letter it
/// was played as once it reaches the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    letter: char,
    points: u32,
    location: TileLocation,
    assigned: Option<char>,
}

impl Tile {
    /// Create a tile sitting in the bag.
    #[must_use]
    pub fn new(id: TileId, letter: char, points: u32) -> Self {
        Self {
            id,
            letter,
            points,
            location: TileLocation::Bag,
            assigned: None,
        }
    }

    /// Printed letter, `BLANK` for blanks.
    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn location(&self) -> TileLocation {
        self.location
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }

    /// Letter this tile spells: the assigned letter for a played blank.
    #[must_use]
    pub fn face_letter(&self) -> char {
        self.assigned.unwrap_or(self.letter)
    }

    /// Letter a played blank stands for.
    #[must_use]
    pub fn assigned(&self) -> Option<char> {
        self.assigned
    }

    /// Can this tile spell `letter`?
    #[must_use]
    pub fn matches(&self, letter: char) -> bool {
        self.letter == letter || self.is_blank()
    }

    pub(crate) fn set_location(&mut self, location: TileLocation) {
        self.location = location;
    }

    pub(crate) fn assign(&mut self, letter: char) {
        debug_assert!(self.is_blank(), "only blanks take an assigned letter");
        self.assigned = Some(letter);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.face_letter(), self.points)
    }
}
