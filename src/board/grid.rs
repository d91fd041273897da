//! Board state and multiplier lookup.
//!
//! The board only ever gains occupants. Whether a square's premium still
//! counts is decided by the play engine, not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::layout::standard_multiplier;
use super::square::{Direction, Multiplier, Occupant, Position, Square};
use super::{BOARD_SIZE, CENTER};
use crate::core::PlayError;
use crate::tiles::{Tile, TileLocation};

/// Squares of one run; a run never exceeds a board side.
pub type Run = SmallVec<[Position; BOARD_SIZE]>;

/// The squares covered by `len` tiles laid from `start` along `dir`.
///
/// Fails with `OutOfBounds` naming the first square off the board.
pub fn run(start: Position, dir: Direction, len: usize) -> Result<Run, PlayError> {
    let mut squares = Run::new();
    for offset in 0..len {
        let pos = match dir {
            Direction::Horizontal => Position::new(start.row, start.col + offset),
            Direction::Vertical => Position::new(start.row + offset, start.col),
        };
        if !pos.in_bounds() {
            return Err(PlayError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        squares.push(pos);
    }
    Ok(squares)
}

/// 15x15 grid of squares with the standard premium layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Row-major squares.
    squares: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        let squares = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .map(|pos| Square::new(pos, standard_multiplier(pos)))
            .collect();
        Self { squares }
    }

    fn square(&self, pos: Position) -> Result<&Square, PlayError> {
        if pos.in_bounds() {
            Ok(&self.squares[pos.row * BOARD_SIZE + pos.col])
        } else {
            Err(PlayError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    /// True iff no tile sits on (row, col).
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, PlayError> {
        Ok(self.square(Position::new(row, col))?.is_empty())
    }

    /// Premium class of (row, col).
    pub fn multiplier_at(&self, row: usize, col: usize) -> Result<Multiplier, PlayError> {
        Ok(self.square(Position::new(row, col))?.multiplier)
    }

    /// Tile face at `pos`; `None` when empty or off the board.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<&Occupant> {
        self.square(pos).ok().and_then(|sq| sq.occupant.as_ref())
    }

    /// Letter at `pos`; `None` when empty or off the board.
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.occupant(pos).map(|occ| occ.letter)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupant(pos).is_some()
    }

    /// Put `tile` on (row, col) and mark it as on the board.
    pub fn place(&mut self, tile: &mut Tile, row: usize, col: usize) -> Result<(), PlayError> {
        let pos = Position::new(row, col);
        self.square(pos)?;
        let square = &mut self.squares[row * BOARD_SIZE + col];
        if square.occupant.is_some() {
            return Err(PlayError::OccupiedSquare { row, col });
        }
        square.occupant = Some(Occupant {
            tile: tile.id,
            letter: tile.face_letter(),
            points: tile.points(),
        });
        tile.set_location(TileLocation::Board);
        Ok(())
    }

    /// Number of squares holding a tile.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|sq| !sq.is_empty()).count()
    }

    /// True before the first tile is placed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Does the centre square hold a tile?
    #[must_use]
    pub fn center_covered(&self) -> bool {
        self.is_occupied(CENTER)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.squares.chunks(BOARD_SIZE).enumerate() {
            write!(f, "{row:>3}")?;
            for square in cells {
                match square.occupant {
                    Some(occ) => write!(f, "  {}", occ.letter)?,
                    None => write!(f, " {}", square.multiplier.marker())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
