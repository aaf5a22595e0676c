//! The turn/choice state machine.
//!
//! `Game` owns all mutable state for one game: the catalog, the shared
//! supply, every player's zones, the turn counters, the RNG, and the
//! observation log. Exactly one decision is outstanding at a time; the
//! driver resolves it with [`Game::next_choice`] and receives either the
//! next decision or the end of the game.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardKind, Catalog};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::observe::ObservationLog;
use crate::supply::Supply;
use crate::zones::PlayerZones;

use super::choice::{Alternative, Choice, Decision, Step};

/// Piles that end the game when three of them are exhausted.
const PILE_OUT_LIMIT: usize = 3;

/// Final game statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// The winning player.
    pub winner: PlayerId,
    /// Number of turns played.
    pub turns: u32,
    /// The winner's score.
    pub score: i64,
}

/// Builder for a [`Game`].
///
/// Defaults to a two-player game on the base set with conventional
/// supply stocks and a 7 Copper / 3 Estate starting deck.
#[derive(Clone)]
pub struct GameBuilder {
    player_count: usize,
    catalog: Catalog,
    piles: Option<Vec<(String, u32)>>,
    starting_deck: Vec<(String, u32)>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            catalog: Catalog::base_set(),
            piles: None,
            starting_deck: vec![("Copper".to_string(), 7), ("Estate".to_string(), 3)],
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((2..=8).contains(&count), "Player count must be 2-8");
        self.player_count = count;
        self
    }

    /// Replace the default catalog. Supply piles and starting decks are
    /// resolved against it by name at build time.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Add a supply pile. The first call replaces the default stocks.
    pub fn pile(mut self, name: &str, count: u32) -> Self {
        self.piles
            .get_or_insert_with(Vec::new)
            .push((name.to_string(), count));
        self
    }

    /// Replace the default starting deck composition.
    pub fn starting_deck(mut self, composition: &[(&str, u32)]) -> Self {
        self.starting_deck = composition
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect();
        self
    }

    /// Build the game: shuffle starting decks and deal opening hands.
    pub fn build(self, seed: u64) -> Game {
        let catalog = self.catalog;
        let resolve = |name: &str| -> CardId {
            catalog
                .lookup(name)
                .unwrap_or_else(|| panic!("Unknown card name {:?}", name))
        };

        let mut supply = Supply::new();
        let piles = self.piles.unwrap_or_else(|| {
            vec![
                ("Copper".to_string(), 46),
                ("Silver".to_string(), 40),
                ("Gold".to_string(), 30),
                ("Estate".to_string(), 8),
                ("Duchy".to_string(), 8),
                ("Province".to_string(), 8),
            ]
        });
        for (name, count) in &piles {
            supply.add_pile(resolve(name), *count);
        }

        let deck_spec: Vec<(CardId, u32)> = self
            .starting_deck
            .iter()
            .map(|(name, count)| (resolve(name), *count))
            .collect();

        let mut rng = GameRng::new(seed);
        let mut log = ObservationLog::new();
        let mut players = PlayerMap::new(self.player_count, |player| {
            let mut deck = Vec::new();
            for &(card, count) in &deck_spec {
                deck.extend(std::iter::repeat(card).take(count as usize));
            }
            PlayerZones::new(player, deck, &mut rng)
        });

        // Opening deal.
        for (_, zones) in players.iter_mut() {
            log.extend(zones.cleanup(&mut rng, &catalog));
        }

        Game {
            catalog,
            supply,
            players,
            active_player: PlayerId::new(0),
            turn_number: 1,
            log,
            rng,
            pending: None,
            started: false,
        }
    }
}

/// One game's complete state and its state machine.
pub struct Game {
    catalog: Catalog,
    supply: Supply,
    players: PlayerMap<PlayerZones>,
    active_player: PlayerId,
    turn_number: u32,
    log: ObservationLog,
    rng: GameRng,
    /// The most recently issued, not yet resolved choice.
    pending: Option<Choice>,
    started: bool,
}

impl Game {
    /// Start the first player's turn and issue the first decision.
    ///
    /// Panics if called twice.
    pub fn first_choice(&mut self) -> Step {
        assert!(!self.started, "first_choice() called twice");
        self.started = true;

        let obs = self.players[self.active_player].start_turn(self.turn_number);
        self.log.append(obs);
        self.next_decision()
    }

    /// Resolve the outstanding decision with the chosen alternative and
    /// produce the next step.
    ///
    /// The alternative must be a member of the most recently issued
    /// choice's set; anything else is a protocol violation and panics.
    pub fn next_choice(&mut self, chosen: &Alternative) -> Step {
        let pending = self
            .pending
            .take()
            .expect("next_choice() called with no outstanding decision");
        assert!(
            pending.offers(chosen),
            "Protocol violation: {:?} is not among the offered alternatives",
            chosen
        );
        debug_assert_eq!(pending.player, self.active_player);

        match *chosen {
            Alternative::Play(card) => {
                let obs = self.players[self.active_player].play_resource(card, &self.catalog);
                self.log.append(obs);
            }
            Alternative::Buy(card) => {
                self.supply.take(card);
                let obs = self.players[self.active_player].gain(card, &self.catalog);
                self.log.append(obs);
                if self.players[self.active_player].buys() == 0 {
                    self.cleanup_and_advance();
                }
            }
            Alternative::EndTurn => {
                self.cleanup_and_advance();
            }
        }

        self.next_decision()
    }

    /// Whether the game has ended: the highest-tier victory pile is
    /// exhausted, or at least three piles of any kind are.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        if self.supply.exhausted_count() >= PILE_OUT_LIMIT {
            return true;
        }
        match self.supply.flagship_victory(&self.catalog) {
            Some(card) => self.supply.remaining(card) == 0,
            None => false,
        }
    }

    /// The winning player and their score.
    ///
    /// Ties are broken by turn order: the earliest seat with the maximal
    /// score wins. Panics before game over.
    #[must_use]
    pub fn winner(&self) -> (PlayerId, i64) {
        assert!(self.is_game_over(), "winner() queried before game over");

        let mut best = (PlayerId::new(0), self.score(PlayerId::new(0)));
        for player in PlayerId::all(self.player_count()).skip(1) {
            let score = self.score(player);
            if score > best.1 {
                best = (player, score);
            }
        }
        best
    }

    /// Final statistics. Panics before game over.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        let (winner, score) = self.winner();
        GameStats {
            winner,
            turns: self.turn_number,
            score,
        }
    }

    /// A player's current score: summed victory points over all zones.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.players[player]
            .all_cards()
            .map(|card| self.catalog.get(card).vp)
            .sum()
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Current turn number (increments when play wraps to the first seat).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The card catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shared supply.
    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// A player's zones, read-only.
    #[must_use]
    pub fn player_zones(&self, player: PlayerId) -> &PlayerZones {
        &self.players[player]
    }

    /// The full observation log.
    #[must_use]
    pub fn log(&self) -> &ObservationLog {
        &self.log
    }

    fn cleanup_and_advance(&mut self) {
        let observations =
            self.players[self.active_player].cleanup(&mut self.rng, &self.catalog);
        self.log.extend(observations);

        self.active_player = self.active_player.next(self.player_count());
        if self.active_player == PlayerId::new(0) {
            self.turn_number += 1;
        }

        let obs = self.players[self.active_player].start_turn(self.turn_number);
        self.log.append(obs);
    }

    /// Check termination, then construct the next decision for the
    /// active player. The alternative set is never empty: ending the
    /// turn is always legal.
    fn next_decision(&mut self) -> Step {
        if self.is_game_over() {
            self.pending = None;
            return Step::GameOver(self.log.publish_since());
        }

        let zones = &self.players[self.active_player];
        let mut alternatives = Vec::new();

        let mut seen: Vec<CardId> = Vec::new();
        for &card in zones.hand() {
            if self.catalog.get(card).kind == CardKind::Resource && !seen.contains(&card) {
                seen.push(card);
                alternatives.push(Alternative::Play(card));
            }
        }

        for card in self.supply.affordable_at(zones.coins(), &self.catalog) {
            alternatives.push(Alternative::Buy(card));
        }

        alternatives.push(Alternative::EndTurn);

        let choice = Choice {
            player: self.active_player,
            alternatives,
        };
        self.pending = Some(choice.clone());

        Step::Decision(Decision {
            observations: self.log.publish_since(),
            choice,
        })
    }
}
