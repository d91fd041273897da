//! Typed turn input handed over by a front end.

use serde::{Deserialize, Serialize};

/// A placement request, already split into fields.
///
/// `direction` stays a raw character; `Play::validate` decides whether it is
/// `'h'` or `'v'`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnInput {
    pub letters: String,
    pub row: usize,
    pub col: usize,
    pub direction: char,
}

impl TurnInput {
    pub fn new(letters: impl Into<String>, row: usize, col: usize, direction: char) -> Self {
        Self {
            letters: letters.into(),
            row,
            col,
            direction,
        }
    }
}

impl std::fmt::Display for TurnInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}-{}", self.letters, self.row, self.col, self.direction)
    }
}
