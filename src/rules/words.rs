//! Word tracing over the committed board.
//!
//! A word is a maximal line of contiguous occupied squares. Each tile of a
//! traced word remembers whether it was placed this turn and the premium of
//! its square, which is all scoring needs.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::board::{Board, Direction, Multiplier, Position};
use crate::core::TileId;

/// One tile of a traced word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordTile {
    pub tile: TileId,
    pub position: Position,
    pub letter: char,
    pub points: u32,
    /// Placed on this turn, so its square's premium still applies.
    pub fresh: bool,
    pub multiplier: Multiplier,
}

/// A line of tiles read left-to-right or top-to-bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub direction: Option<Direction>,
    pub tiles: SmallVec<[WordTile; 8]>,
}

impl Word {
    /// The letters of the word.
    #[must_use]
    pub fn text(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordTile> {
        self.tiles.iter()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// First occupied square of the line through `pos` along `dir`.
fn line_start(board: &Board, pos: Position, dir: Direction) -> Position {
    let mut start = pos;
    while let Some(prev) = start.backward(dir) {
        if !board.is_occupied(prev) {
            break;
        }
        start = prev;
    }
    start
}

/// The maximal occupied line through `pos` along `dir`.
///
/// Empty when `pos` itself is empty.
pub fn trace_line(board: &Board, pos: Position, dir: Direction, fresh: &FxHashSet<TileId>) -> Word {
    let mut word = Word {
        direction: Some(dir),
        tiles: SmallVec::new(),
    };
    let mut cursor = Some(line_start(board, pos, dir));
    while let Some(at) = cursor {
        let Some(occ) = board.occupant(at) else {
            break;
        };
        word.tiles.push(WordTile {
            tile: occ.tile,
            position: at,
            letter: occ.letter,
            points: occ.points,
            fresh: fresh.contains(&occ.tile),
            multiplier: board.multiplier_at(at.row, at.col).unwrap_or_default(),
        });
        cursor = at.forward(dir);
    }
    trace!(word = %word, ?dir, "traced line");
    word
}

/// Primary word through `start` followed by crossing words of length >= 2.
///
/// Crossing words are ordered by their anchor tile along `dir`.
pub fn trace_words(board: &Board, placed: &[TileId], start: Position, dir: Direction) -> Vec<Word> {
    let fresh: FxHashSet<TileId> = placed.iter().copied().collect();
    let primary = trace_line(board, start, dir, &fresh);

    let mut words = Vec::with_capacity(1 + placed.len());
    for anchor in primary.iter().filter(|t| t.fresh) {
        let crossing = trace_line(board, anchor.position, dir.perpendicular(), &fresh);
        if crossing.len() >= 2 {
            words.push(crossing);
        }
    }
    words.insert(0, primary);
    words
}
