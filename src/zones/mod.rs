//! Per-player zone management.

mod player;

pub use player::{PlayerZones, HAND_SIZE};
