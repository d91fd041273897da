//! The 15x15 board.
//!
//! ## Key Types
//!
//! - `Position`, `Direction`: addressing squares and walking runs
//! - `Multiplier`: premium class of a square, fixed at construction
//! - `Square`, `Occupant`: one cell and the tile face it holds
//! - `Board`: the grid, with bounds-checked lookup and placement

pub mod square;
pub mod layout;
pub mod grid;

pub use square::{Direction, Multiplier, Occupant, Position, Square};
pub use grid::{run, Board};

/// Squares along each side of the board.
pub const BOARD_SIZE: usize = 15;

/// The centre square the first word must cover.
pub const CENTER: Position = Position::new(7, 7);
