//! # deckbuilder
//!
//! A deck-building card game engine built for self-play training.
//!
//! ## Design Principles
//!
//! 1. **Engine Offers, Agents Pick**: The engine enumerates the legal
//!    alternatives at every decision point; agents only ever answer with
//!    an index. Illegal input is a programming error and panics.
//!
//! 2. **Explicit Randomness**: Every shuffle and draw goes through a
//!    seedable [`core::GameRng`]. Same seed plus same choices replays the
//!    same game.
//!
//! 3. **Observations Over Queries**: State changes are narrated through
//!    an append-only observation log with per-viewer renderings, so a
//!    hidden draw stays hidden from opponents.
//!
//! ## Modules
//!
//! - `core`: Player identity, per-player storage, seedable RNG
//! - `cards`: Card definitions, effects, and the catalog
//! - `observe`: Audience-scoped observations and the game log
//! - `supply`: The shared purchase piles
//! - `zones`: Per-player deck, hand, play area, and discard
//! - `game`: The turn state machine, choices, and scoring
//! - `agents`: Decision makers and the match driver
//! - `training`: Tabular Monte-Carlo estimation and self-play

pub mod agents;
pub mod cards;
pub mod core;
pub mod game;
pub mod observe;
pub mod supply;
pub mod training;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayerId, PlayerMap};

pub use crate::cards::{Card, CardId, CardKind, Catalog, Effect};

pub use crate::observe::{Observation, ObservationLog};

pub use crate::supply::Supply;

pub use crate::zones::{PlayerZones, HAND_SIZE};

pub use crate::game::{
    Alternative, Choice, Decision, Game, GameBuilder, GameStats, Step,
};

pub use crate::agents::{play_match, Agent, HumanAgent, RandomAgent};

pub use crate::training::{
    mc_evaluate, EpsilonGreedy, EvalConfig, EvalSummary, Greedy, Policy, PolicyAgent,
    TabularEstimator, Trainer, ValueEstimator,
};
