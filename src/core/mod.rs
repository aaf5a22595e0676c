//! Core primitives: player identity and deterministic randomness.

mod player;
mod rng;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
