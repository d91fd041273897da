//! Standard premium-square layout.
//!
//! The layout is symmetric about both centre lines, so only the top-left
//! quadrant (rows and columns 0..=7) is listed and mirrored.

use super::square::{Multiplier, Position};
use super::BOARD_SIZE;

const TRIPLE_WORD: [(usize, usize); 3] = [(0, 0), (0, 7), (7, 0)];
const DOUBLE_WORD: [(usize, usize); 4] = [(1, 1), (2, 2), (3, 3), (4, 4)];
const TRIPLE_LETTER: [(usize, usize); 3] = [(1, 5), (5, 1), (5, 5)];
const DOUBLE_LETTER: [(usize, usize); 7] = [(0, 3), (2, 6), (3, 0), (3, 7), (6, 2), (6, 6), (7, 3)];

/// Fold a position into the top-left quadrant.
const fn fold(pos: Position) -> (usize, usize) {
    let last = BOARD_SIZE - 1;
    let row = if pos.row > last / 2 { last - pos.row } else { pos.row };
    let col = if pos.col > last / 2 { last - pos.col } else { pos.col };
    (row, col)
}

/// Premium class of a square on the standard board.
#[must_use]
pub fn standard_multiplier(pos: Position) -> Multiplier {
    let key = fold(pos);
    if key == (7, 7) {
        Multiplier::Center
    } else if TRIPLE_WORD.contains(&key) {
        Multiplier::TripleWord
    } else if DOUBLE_WORD.contains(&key) {
        Multiplier::DoubleWord
    } else if TRIPLE_LETTER.contains(&key) {
        Multiplier::TripleLetter
    } else if DOUBLE_LETTER.contains(&key) {
        Multiplier::DoubleLetter
    } else {
        Multiplier::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(kind: Multiplier) -> usize {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|&pos| standard_multiplier(pos) == kind)
            .count()
    }

    #[test]
    fn test_premium_counts() {
        assert_eq!(count(Multiplier::Center), 1);
        assert_eq!(count(Multiplier::TripleWord), 8);
        assert_eq!(count(Multiplier::DoubleWord), 16);
        assert_eq!(count(Multiplier::TripleLetter), 12);
        assert_eq!(count(Multiplier::DoubleLetter), 24);
    }

    #[test]
    fn test_known_squares() {
        assert_eq!(standard_multiplier(Position::new(7, 7)), Multiplier::Center);
        assert_eq!(standard_multiplier(Position::new(14, 14)), Multiplier::TripleWord);
        assert_eq!(standard_multiplier(Position::new(13, 1)), Multiplier::DoubleWord);
        assert_eq!(standard_multiplier(Position::new(9, 13)), Multiplier::TripleLetter);
        assert_eq!(standard_multiplier(Position::new(8, 12)), Multiplier::DoubleLetter);
        assert_eq!(standard_multiplier(Position::new(7, 8)), Multiplier::None);
    }
}
