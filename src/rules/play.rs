//! Per-turn play engine: validation, word discovery and scoring.
//!
//! ## Lifecycle
//!
//! ```text
//! Created -> Validating -> Valid   -> Committed
//!                       -> Invalid -> (discarded)
//! ```
//!
//! `validate` only reads the board. The caller commits the tiles with
//! `Rack::place_tile_str`, then `get_words` and `calculate_points` read the
//! committed board. A play never mutates the board or a rack itself.
//!
//! ```
//! use rust_scrabble::board::{Board, Direction, Position};
//! use rust_scrabble::core::PlayerId;
//! use rust_scrabble::rules::{Play, ScoringRules};
//! use rust_scrabble::tiles::{Rack, TileArena, TileLocation};
//!
//! let mut arena = TileArena::new();
//! let mut rack = Rack::new(7);
//! for letter in ['C', 'A', 'T'] {
//!     let id = arena.create(letter, 1);
//!     arena.move_to(id, TileLocation::Rack);
//!     rack.extend([id]);
//! }
//! let mut board = Board::new();
//! let mut play = Play::new(PlayerId::new(0), 1, ScoringRules::default());
//!
//! play.validate("CAT", &board, 7, 7, 'h', true)?;
//! let placed = rack.place_tile_str("CAT", &mut board, &mut arena, 7, 7, Direction::Horizontal)?;
//! let words = play.get_words(&placed, &board, 7, 7, Direction::Horizontal);
//! assert_eq!(words[0].text(), "CAT");
//! assert_eq!(play.calculate_points(&words), 6);
//! # Ok::<(), rust_scrabble::core::PlayError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{tiles_placed, turn_score, ScoringRules};
use super::words::{trace_words, Word};
use crate::board::{run, Board, Direction, Position, CENTER};
use crate::core::{PlayError, PlayerId, TileId};
use crate::tiles::parse_letters;

/// Where a play is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    Created,
    Validating,
    Valid,
    Invalid,
    Committed,
}

/// One player's placement for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    player: PlayerId,
    turn: u32,
    state: PlayState,
    letters: String,
    placed: Vec<TileId>,
    words: Vec<Word>,
    points: u32,
    rules: ScoringRules,
}

impl Play {
    /// Start a play for `player` on turn `turn`.
    #[must_use]
    pub fn new(player: PlayerId, turn: u32, rules: ScoringRules) -> Self {
        Self {
            player,
            turn,
            state: PlayState::Created,
            letters: String::new(),
            placed: Vec::new(),
            words: Vec::new(),
            points: 0,
            rules,
        }
    }

    /// Check a proposed placement against the board.
    ///
    /// Checks, in order: direction, letters, bounds, centre coverage on the
    /// first turn or contact with existing tiles afterwards, agreement with
    /// tiles already on the run, and that at least one tile is new.
    pub fn validate(
        &mut self,
        letters: &str,
        board: &Board,
        row: usize,
        col: usize,
        dir: char,
        first_turn: bool,
    ) -> Result<(), PlayError> {
        self.state = PlayState::Validating;
        match check_placement(letters, board, row, col, dir, first_turn) {
            Ok(()) => {
                self.state = PlayState::Valid;
                self.letters = letters.to_ascii_uppercase();
                Ok(())
            }
            Err(err) => {
                debug!(player = %self.player, %letters, row, col, %dir, %err, "placement rejected");
                self.state = PlayState::Invalid;
                Err(err)
            }
        }
    }

    /// `validate` reduced to a yes/no answer.
    pub fn is_valid(
        &mut self,
        letters: &str,
        board: &Board,
        row: usize,
        col: usize,
        dir: char,
        first_turn: bool,
    ) -> bool {
        self.validate(letters, board, row, col, dir, first_turn).is_ok()
    }

    /// Words formed by the committed run starting at (row, col).
    ///
    /// The primary word comes first, then every crossing word of two or more
    /// letters through a tile in `placed`, in run order.
    #[must_use]
    pub fn get_words(
        &self,
        placed: &[TileId],
        board: &Board,
        row: usize,
        col: usize,
        dir: Direction,
    ) -> Vec<Word> {
        trace_words(board, placed, Position::new(row, col), dir)
    }

    /// Score `words` and record them as this play's result.
    ///
    /// A one-letter word only scores when every word of the turn is one
    /// letter; otherwise it is left out of the total.
    pub fn calculate_points(&mut self, words: &[Word]) -> u32 {
        self.points = turn_score(words, &self.rules);
        self.words = words.to_vec();
        self.placed = words
            .first()
            .map(|primary| primary.iter().filter(|t| t.fresh).map(|t| t.tile).collect())
            .unwrap_or_default();
        self.state = PlayState::Committed;
        self.points
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Letters as submitted, upper-cased.
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Tiles this play put on the board, in run order.
    #[must_use]
    pub fn placed(&self) -> &[TileId] {
        &self.placed
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn points_made(&self) -> u32 {
        self.points
    }

    /// Did this play use a full rack?
    #[must_use]
    pub fn is_bingo(&self) -> bool {
        tiles_placed(&self.words) == self.rules.rack_size
    }
}

/// Placement legality, without touching any play state.
pub fn check_placement(
    letters: &str,
    board: &Board,
    row: usize,
    col: usize,
    dir: char,
    first_turn: bool,
) -> Result<(), PlayError> {
    let dir = Direction::try_from(dir)?;
    let letters = parse_letters(letters)?;
    let squares = run(Position::new(row, col), dir, letters.len())?;

    if first_turn {
        if !squares.contains(&CENTER) {
            return Err(PlayError::CenterNotCovered);
        }
    } else {
        let touches = squares
            .iter()
            .any(|&pos| board.is_occupied(pos) || pos.neighbours().any(|n| board.is_occupied(n)));
        if !touches {
            return Err(PlayError::DisconnectedPlay);
        }
    }

    let mut new_tiles = 0;
    for (&pos, &letter) in squares.iter().zip(letters.iter()) {
        match board.letter_at(pos) {
            Some(found) if found != letter => return Err(conflict(pos, letter, found)),
            Some(_) => {}
            None => new_tiles += 1,
        }
    }
    if new_tiles == 0 {
        return Err(PlayError::NoNewTiles);
    }
    Ok(())
}

fn conflict(pos: Position, expected: char, found: char) -> PlayError {
    PlayError::ConflictingTile {
        row: pos.row,
        col: pos.col,
        expected,
        found,
    }
}
