//! Presentation hooks for the turn loop.
//!
//! The engine never prints. A front end passes a `Presenter` into each turn
//! call and receives the events it wants to render or audit.

use tracing::{info, warn};

use super::result::GameResult;
use super::turn::TurnInput;
use crate::core::{PlayError, PlayerId};
use crate::rules::Play;

/// Receiver of turn-loop events. Every method defaults to a no-op.
pub trait Presenter {
    /// A raw turn request arrived (audit hook).
    fn input_received(&mut self, _player: PlayerId, _input: &TurnInput) {}

    /// A play was committed and scored.
    fn turn_committed(&mut self, _play: &Play) {}

    /// A request broke a rule; the same player is still on turn.
    fn turn_rejected(&mut self, _player: PlayerId, _error: &PlayError) {}

    /// The player gave up the turn.
    fn turn_passed(&mut self, _player: PlayerId) {}

    /// The game just ended.
    fn game_over(&mut self, _result: &GameResult) {}
}

/// Presenter that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// Presenter that forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn input_received(&mut self, player: PlayerId, input: &TurnInput) {
        info!(%player, %input, "turn input");
    }

    fn turn_committed(&mut self, play: &Play) {
        let words: Vec<String> = play.words().iter().map(|w| w.text()).collect();
        info!(player = %play.player(), turn = play.turn(), ?words, points = play.points_made(), "play committed");
    }

    fn turn_rejected(&mut self, player: PlayerId, error: &PlayError) {
        warn!(%player, %error, "play rejected");
    }

    fn turn_passed(&mut self, player: PlayerId) {
        info!(%player, "turn passed");
    }

    fn game_over(&mut self, result: &GameResult) {
        info!(?result, "game over");
    }
}
