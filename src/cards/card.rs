//! Static card definitions.
//!
//! A `Card` is an immutable value describing a card kind: its name, cost,
//! category, effects, and point value. Zones and the supply never hold
//! copies of this data - they hold `CardId`s into the [`Catalog`], so card
//! equality is equality of interned identity, i.e. of name.
//!
//! [`Catalog`]: super::Catalog

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Interned identity of a card name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Grants purchasing power when played.
    Resource,
    /// No in-turn effect; contributes points to the final score.
    Victory,
}

/// An atomic card effect.
///
/// Effects are a closed set interpreted by exhaustive matching, so adding
/// a kind is a compile-time-checked extension point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant N units of purchasing power for the current turn.
    GainCoins(i64),
}

/// Immutable definition of one card kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Interned identity, assigned by the catalog.
    pub id: CardId,

    /// Unique name.
    pub name: String,

    /// Card category.
    pub kind: CardKind,

    /// Acquisition cost (non-negative).
    pub cost: i64,

    /// Ordered effects applied when the card is played.
    /// Inline storage for the common single-effect case.
    pub effects: SmallVec<[Effect; 1]>,

    /// Victory-point value (0 for non-victory cards).
    pub vp: i64,
}

impl Card {
    /// Define a resource card granting `coins` purchasing power.
    #[must_use]
    pub fn resource(name: impl Into<String>, cost: i64, coins: i64) -> Self {
        assert!(cost >= 0, "Card cost must be non-negative");
        Self {
            id: CardId::new(0), // assigned on catalog insert
            name: name.into(),
            kind: CardKind::Resource,
            cost,
            effects: SmallVec::from_buf([Effect::GainCoins(coins)]),
            vp: 0,
        }
    }

    /// Define a victory card worth `vp` points.
    #[must_use]
    pub fn victory(name: impl Into<String>, cost: i64, vp: i64) -> Self {
        assert!(cost >= 0, "Card cost must be non-negative");
        assert!(vp >= 0, "Victory-point value must be non-negative");
        Self {
            id: CardId::new(0),
            name: name.into(),
            kind: CardKind::Victory,
            cost,
            effects: SmallVec::new(),
            vp,
        }
    }

    /// Total purchasing power granted when this card is played.
    #[must_use]
    pub fn coin_value(&self) -> i64 {
        self.effects
            .iter()
            .map(|effect| match effect {
                Effect::GainCoins(n) => *n,
            })
            .sum()
    }
}
