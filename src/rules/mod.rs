//! Placement rules: validation, word tracing and scoring.
//!
//! - `play`: the per-turn `Play` and its legality checks
//! - `words`: tracing the primary and crossing words of a committed run
//! - `scoring`: premium-aware word and turn scoring

pub mod play;
pub mod words;
pub mod scoring;

pub use play::{check_placement, Play, PlayState};
pub use words::{trace_line, trace_words, Word, WordTile};
pub use scoring::{tiles_placed, turn_score, word_score, ScoringRules};
