//! Turn loop for 1-4 local players.
//!
//! `Game` wires the rules engine to the tile containers: validate, commit,
//! trace, score, refill, next player. Front ends supply typed `TurnInput`
//! and a `Presenter` for rendering and auditing.

pub mod session;
pub mod presenter;
pub mod result;
pub mod turn;

pub use session::Game;
pub use presenter::{NullPresenter, Presenter, TracingPresenter};
pub use result::GameResult;
pub use turn::TurnInput;
