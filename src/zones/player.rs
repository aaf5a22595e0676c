//! One player's card zones and turn-scoped resources.
//!
//! Each player exclusively owns four zones: an ordered draw pile (top =
//! next draw), a hand, the played area for the current turn, and a
//! discard pile that gets reshuffled into the draw pile when it empties.
//! Cards never leave this set except by never having entered it - over a
//! game, zones plus supply stock conserve the initial count of every
//! card name.
//!
//! Zone-mutating operations return the observations they produce; the
//! orchestrator is responsible for appending them to the observation log.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardKind, Catalog};
use crate::core::{GameRng, PlayerId};
use crate::observe::Observation;

/// Cards redrawn at the end of every turn.
pub const HAND_SIZE: usize = 5;

/// Deck, hand, played area, and discard pile for one player, plus the
/// purchasing power and buys accumulated this turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerZones {
    player: PlayerId,

    /// Ordered; the last element is the next card drawn.
    draw_pile: Vec<CardId>,
    hand: Vec<CardId>,
    played: Vec<CardId>,
    discard: Vec<CardId>,

    /// Purchasing power accumulated this turn.
    coins: i64,
    /// Purchases remaining this turn.
    buys: u32,
}

impl PlayerZones {
    /// Create zones for a player with the given starting deck.
    ///
    /// The deck is shuffled; hand, played area, and discard start empty.
    /// Call [`PlayerZones::cleanup`] to deal the opening hand.
    #[must_use]
    pub fn new(player: PlayerId, mut starting_deck: Vec<CardId>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut starting_deck);
        Self {
            player,
            draw_pile: starting_deck,
            hand: Vec::new(),
            played: Vec::new(),
            discard: Vec::new(),
            coins: 0,
            buys: 0,
        }
    }

    /// The owning player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Purchasing power accumulated this turn.
    #[must_use]
    pub fn coins(&self) -> i64 {
        self.coins
    }

    /// Purchases remaining this turn.
    #[must_use]
    pub fn buys(&self) -> u32 {
        self.buys
    }

    /// Current hand.
    #[must_use]
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    /// Current draw pile, bottom to top.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    /// Cards played this turn.
    #[must_use]
    pub fn played(&self) -> &[CardId] {
        &self.played
    }

    /// Current discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard
    }

    /// Union of all four zones, for scoring.
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.draw_pile
            .iter()
            .chain(self.hand.iter())
            .chain(self.played.iter())
            .chain(self.discard.iter())
            .copied()
    }

    /// Move the top card of the draw pile into hand.
    ///
    /// An empty draw pile is first refilled by shuffling the entire
    /// discard pile into it. With both piles empty the draw is a no-op
    /// and emits nothing. The draw observation names the card only for
    /// the drawing player.
    pub fn draw(&mut self, rng: &mut GameRng, catalog: &Catalog) -> Option<Observation> {
        if self.draw_pile.is_empty() {
            if self.discard.is_empty() {
                return None;
            }
            self.draw_pile.append(&mut self.discard);
            rng.shuffle(&mut self.draw_pile);
        }

        let card = self.draw_pile.pop()?;
        self.hand.push(card);

        Some(Observation::hidden(
            self.player,
            format!("{} drew {}", self.player, catalog.get(card).name),
            format!("{} drew a card", self.player),
        ))
    }

    /// Reset turn resources at the start of a turn.
    pub fn start_turn(&mut self, turn: u32) -> Observation {
        self.coins = 0;
        self.buys = 1;
        Observation::public(self.player, format!("{} starts turn {}", self.player, turn))
    }

    /// Play a resource card from hand, accumulating its coins.
    ///
    /// Panics if the card is not in hand or is not a resource - that
    /// means the caller offered an illegal alternative.
    pub fn play_resource(&mut self, card: CardId, catalog: &Catalog) -> Observation {
        let definition = catalog.get(card);
        assert!(
            definition.kind == CardKind::Resource,
            "{} is not a resource card",
            definition.name
        );
        let position = self
            .hand
            .iter()
            .position(|&c| c == card)
            .unwrap_or_else(|| panic!("{} has no {} in hand", self.player, definition.name));

        self.hand.remove(position);
        self.played.push(card);
        self.coins += definition.coin_value();

        // Playing is a public action; naming the card reveals nothing.
        Observation::public(
            self.player,
            format!(
                "{} played {} ({} coins)",
                self.player, definition.name, self.coins
            ),
        )
    }

    /// Gain a purchased card into the discard pile.
    ///
    /// Invoked by the orchestrator after [`crate::supply::Supply::take`].
    /// Panics if the card is unaffordable or no buys remain.
    pub fn gain(&mut self, card: CardId, catalog: &Catalog) -> Observation {
        let definition = catalog.get(card);
        assert!(
            self.coins >= definition.cost,
            "{} cannot afford {} ({} coins < cost {})",
            self.player,
            definition.name,
            self.coins,
            definition.cost
        );
        assert!(self.buys > 0, "{} has no buys remaining", self.player);

        self.coins -= definition.cost;
        self.buys -= 1;
        // Gained cards go face-down into the discard pile.
        self.discard.push(card);

        Observation::public(
            self.player,
            format!("{} bought {}", self.player, definition.name),
        )
    }

    /// End-of-turn reset: discard hand and played area, redraw to
    /// [`HAND_SIZE`]. Returns the draw observations in order.
    pub fn cleanup(&mut self, rng: &mut GameRng, catalog: &Catalog) -> Vec<Observation> {
        self.discard.append(&mut self.hand);
        self.discard.append(&mut self.played);

        let mut observations = Vec::with_capacity(HAND_SIZE);
        while self.hand.len() < HAND_SIZE {
            match self.draw(rng, catalog) {
                Some(obs) => observations.push(obs),
                None => break,
            }
        }
        observations
    }
}
