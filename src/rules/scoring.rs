//! Multiplier-aware scoring.
//!
//! Premiums apply only to tiles placed this turn (`WordTile::fresh`); tiles
//! reused from earlier turns count their face value. The turn total does not
//! depend on the order of the words.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::words::Word;
use crate::core::{GameConfig, TileId};

/// Parameters of turn scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Tiles in a full rack; placing that many earns the bingo bonus.
    pub rack_size: usize,
    pub bingo_bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            rack_size: 7,
            bingo_bonus: 50,
        }
    }
}

impl From<&GameConfig> for ScoringRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            rack_size: config.rack_size,
            bingo_bonus: config.bingo_bonus,
        }
    }
}

/// Score of a single word.
#[must_use]
pub fn word_score(word: &Word) -> u32 {
    let mut subtotal = 0;
    let mut factor = 1;
    for tile in word.iter() {
        if tile.fresh {
            subtotal += tile.points * tile.multiplier.letter_factor();
            factor *= tile.multiplier.word_factor();
        } else {
            subtotal += tile.points;
        }
    }
    subtotal * factor
}

/// Distinct tiles placed this turn across `words`.
#[must_use]
pub fn tiles_placed(words: &[Word]) -> usize {
    words
        .iter()
        .flat_map(|w| w.iter())
        .filter(|t| t.fresh)
        .map(|t| t.tile)
        .collect::<FxHashSet<TileId>>()
        .len()
}

/// Total for a turn: every word, plus the bingo bonus for a full rack.
///
/// Single-letter words only count when they are all the turn formed, so a
/// lone tile hooked onto a crossing word is not scored twice.
#[must_use]
pub fn turn_score(words: &[Word], rules: &ScoringRules) -> u32 {
    let only_singles = words.iter().all(|w| w.len() < 2);
    let mut total: u32 = words
        .iter()
        .filter(|w| only_singles || w.len() >= 2)
        .map(word_score)
        .sum();
    if tiles_placed(words) == rules.rack_size {
        total += rules.bingo_bonus;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Multiplier, Position};
    use crate::rules::WordTile;
    use smallvec::SmallVec;

    fn word(tiles: &[(u32, char, u32, bool, Multiplier)]) -> Word {
        Word {
            direction: None,
            tiles: tiles
                .iter()
                .enumerate()
                .map(|(i, &(id, letter, points, fresh, multiplier))| WordTile {
                    tile: TileId(id),
                    position: Position::new(0, i),
                    letter,
                    points,
                    fresh,
                    multiplier,
                })
                .collect::<SmallVec<_>>(),
        }
    }

    #[test]
    fn test_letter_multiplier_on_fresh_tile() {
        let w = word(&[
            (0, 'H', 4, true, Multiplier::None),
            (1, 'E', 1, true, Multiplier::DoubleLetter),
        ]);
        assert_eq!(word_score(&w), 6);
    }

    #[test]
    fn test_word_multipliers_stack() {
        let w = word(&[
            (0, 'A', 1, true, Multiplier::TripleWord),
            (1, 'B', 3, false, Multiplier::None),
            (2, 'C', 3, true, Multiplier::DoubleWord),
        ]);
        assert_eq!(word_score(&w), 7 * 6);
    }

    #[test]
    fn test_reused_square_keeps_no_premium() {
        let w = word(&[
            (0, 'X', 8, false, Multiplier::TripleLetter),
            (1, 'I', 1, true, Multiplier::None),
        ]);
        assert_eq!(word_score(&w), 9);

        let w = word(&[
            (0, 'O', 1, false, Multiplier::Center),
            (1, 'X', 8, true, Multiplier::None),
        ]);
        assert_eq!(word_score(&w), 9);
    }

    #[test]
    fn test_bingo_bonus() {
        let letters: Vec<_> = "SCRABBLE"
            .chars()
            .enumerate()
            .map(|(i, c)| (i as u32, c, 1, i < 7, Multiplier::None))
            .collect();
        let w = word(&letters);

        let rules = ScoringRules::default();
        assert_eq!(tiles_placed(std::slice::from_ref(&w)), 7);
        assert_eq!(turn_score(&[w], &rules), 8 + 50);
    }

    #[test]
    fn test_single_letter_primary_not_double_counted() {
        let primary = word(&[(5, 'S', 1, true, Multiplier::None)]);
        let crossing = word(&[
            (0, 'C', 3, false, Multiplier::None),
            (1, 'A', 1, false, Multiplier::None),
            (2, 'T', 1, false, Multiplier::None),
            (5, 'S', 1, true, Multiplier::None),
        ]);
        let rules = ScoringRules::default();
        assert_eq!(turn_score(&[primary.clone(), crossing], &rules), 6);

        // A lone tile with nothing around it still scores.
        assert_eq!(turn_score(&[primary], &rules), 1);
    }

    #[test]
    fn test_turn_score_ignores_word_order() {
        let a = word(&[
            (0, 'A', 1, true, Multiplier::DoubleWord),
            (1, 'X', 8, true, Multiplier::None),
        ]);
        let b = word(&[
            (2, 'O', 1, false, Multiplier::None),
            (1, 'X', 8, true, Multiplier::None),
        ]);
        let rules = ScoringRules::default();
        assert_eq!(
            turn_score(&[a.clone(), b.clone()], &rules),
            turn_score(&[b, a], &rules)
        );
    }
}
