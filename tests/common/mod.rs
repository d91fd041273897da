//! Simple move generator shared by the game-level tests.

#![allow(dead_code)]

use rust_scrabble::board::{Board, Position, CENTER};
use rust_scrabble::game::{Game, TurnInput};
use rust_scrabble::tiles::BLANK;

/// Empty squares touching at least one occupied square.
pub fn frontier(board: &Board) -> Vec<Position> {
    board
        .squares()
        .filter(|sq| sq.is_empty() && sq.position.neighbours().any(|n| board.is_occupied(n)))
        .map(|sq| sq.position)
        .collect()
}

/// Non-blank letters on the current player's rack.
pub fn playable_letters(game: &Game) -> Vec<char> {
    game.rack_letters(game.current_player())
        .chars()
        .filter(|&c| c != BLANK)
        .collect()
}

/// A single-tile placement that is always legal, if the rack allows one.
pub fn safe_move(game: &Game, pick: usize) -> Option<TurnInput> {
    let letters = playable_letters(game);
    if letters.is_empty() {
        return None;
    }
    let letter = letters[pick % letters.len()];
    let target = if game.is_first_turn() {
        CENTER
    } else {
        let open = frontier(game.board());
        if open.is_empty() {
            return None;
        }
        open[pick % open.len()]
    };
    Some(TurnInput::new(letter.to_string(), target.row, target.col, 'h'))
}

/// A two-tile placement from the frontier that may or may not be legal.
pub fn risky_move(game: &Game, pick: usize, vertical: bool) -> Option<TurnInput> {
    let letters = playable_letters(game);
    if letters.len() < 2 {
        return None;
    }
    let first = pick % letters.len();
    let second = (first + 1) % letters.len();
    let word: String = [letters[first], letters[second]].iter().collect();
    let target = if game.is_first_turn() {
        CENTER
    } else {
        let open = frontier(game.board());
        if open.is_empty() {
            return None;
        }
        open[pick.wrapping_mul(7) % open.len()]
    };
    let dir = if vertical { 'v' } else { 'h' };
    Some(TurnInput::new(word, target.row, target.col, dir))
}
