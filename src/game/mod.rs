//! The turn/choice state machine and its request/response protocol.

mod choice;
mod engine;

pub use choice::{Alternative, Choice, Decision, Step};
pub use engine::{Game, GameBuilder, GameStats};
