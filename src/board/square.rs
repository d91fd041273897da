//! Squares, positions and directions.

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;
use crate::core::{PlayError, TileId};

/// A (row, col) coordinate. Not necessarily on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Is this coordinate inside the 15x15 grid?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The next square along `dir`, or `None` past the edge.
    #[must_use]
    pub fn forward(self, dir: Direction) -> Option<Self> {
        let next = match dir {
            Direction::Horizontal => Self::new(self.row, self.col + 1),
            Direction::Vertical => Self::new(self.row + 1, self.col),
        };
        next.in_bounds().then_some(next)
    }

    /// The previous square along `dir`, or `None` past the edge.
    #[must_use]
    pub fn backward(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Horizontal => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Vertical => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
        }
    }

    /// In-bounds orthogonal neighbours.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        [
            self.backward(Direction::Vertical),
            self.forward(Direction::Vertical),
            self.backward(Direction::Horizontal),
            self.forward(Direction::Horizontal),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Placement direction.
///
/// `'h'` walks increasing columns, `'v'` walks increasing rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Single-letter form used by turn input.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Direction::Horizontal => 'h',
            Direction::Vertical => 'v',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = PlayError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'h' => Ok(Direction::Horizontal),
            'v' => Ok(Direction::Vertical),
            other => Err(PlayError::InvalidDirection(other)),
        }
    }
}

/// Premium class of a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The centre star; doubles the word like `DoubleWord`.
    Center,
}

impl Multiplier {
    /// Factor applied to the letter on this square.
    #[must_use]
    pub const fn letter_factor(self) -> u32 {
        match self {
            Multiplier::DoubleLetter => 2,
            Multiplier::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Factor applied to any word through this square.
    #[must_use]
    pub const fn word_factor(self) -> u32 {
        match self {
            Multiplier::DoubleWord | Multiplier::Center => 2,
            Multiplier::TripleWord => 3,
            _ => 1,
        }
    }

    /// Two-character board marker.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Multiplier::None => " .",
            Multiplier::DoubleLetter => "2L",
            Multiplier::TripleLetter => "3L",
            Multiplier::DoubleWord => "2W",
            Multiplier::TripleWord => "3W",
            Multiplier::Center => " *",
        }
    }
}

/// Face of the tile sitting on a square.
///
/// For a blank, `letter` is the letter it was played as and `points` is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub tile: TileId,
    pub letter: char,
    pub points: u32,
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub position: Position,
    pub multiplier: Multiplier,
    pub occupant: Option<Occupant>,
}

impl Square {
    #[must_use]
    pub fn new(position: Position, multiplier: Multiplier) -> Self {
        Self {
            position,
            multiplier,
            occupant: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}
