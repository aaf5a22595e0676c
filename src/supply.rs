//! The shared supply: depletable piles of purchasable cards.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardKind, Catalog};

/// One pile of identical cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Pile {
    card: CardId,
    remaining: u32,
}

/// Shared bank of card stock, partitioned by kind.
///
/// Piles keep their setup order, so [`Supply::affordable_at`] enumerates
/// candidates in a stable order and choice alternatives are deterministic.
/// Stock only ever decreases after setup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Supply {
    piles: Vec<Pile>,
}

impl Supply {
    /// Create an empty supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile of `count` copies of a card kind at setup.
    ///
    /// Panics if the kind already has a pile.
    pub fn add_pile(&mut self, card: CardId, count: u32) {
        assert!(
            !self.piles.iter().any(|p| p.card == card),
            "Supply already has a pile for {:?}",
            card
        );
        self.piles.push(Pile {
            card,
            remaining: count,
        });
    }

    /// Remaining stock for a card kind (0 if there is no pile).
    #[must_use]
    pub fn remaining(&self, card: CardId) -> u32 {
        self.piles
            .iter()
            .find(|p| p.card == card)
            .map_or(0, |p| p.remaining)
    }

    /// One representative card per non-empty pile with cost at most
    /// `max_cost`, in pile setup order.
    #[must_use]
    pub fn affordable_at(&self, max_cost: i64, catalog: &Catalog) -> Vec<CardId> {
        self.piles
            .iter()
            .filter(|p| p.remaining > 0 && catalog.get(p.card).cost <= max_cost)
            .map(|p| p.card)
            .collect()
    }

    /// Remove one unit from a pile.
    ///
    /// Panics if the pile is missing or empty - callers must have
    /// verified affordability via [`Supply::affordable_at`] first.
    pub fn take(&mut self, card: CardId) {
        let pile = self
            .piles
            .iter_mut()
            .find(|p| p.card == card)
            .unwrap_or_else(|| panic!("No supply pile for {:?}", card));
        assert!(pile.remaining > 0, "Supply pile for {:?} is empty", card);
        pile.remaining -= 1;
    }

    /// Number of piles with zero remaining stock.
    #[must_use]
    pub fn exhausted_count(&self) -> usize {
        self.piles.iter().filter(|p| p.remaining == 0).count()
    }

    /// The victory pile with the highest point value, if any.
    ///
    /// Emptying this pile ends the game.
    #[must_use]
    pub fn flagship_victory(&self, catalog: &Catalog) -> Option<CardId> {
        self.piles
            .iter()
            .map(|p| catalog.get(p.card))
            .filter(|c| c.kind == CardKind::Victory)
            .max_by_key(|c: &&Card| c.vp)
            .map(|c| c.id)
    }

    /// Iterate over `(card, remaining)` pairs in setup order.
    pub fn piles(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        self.piles.iter().map(|p| (p.card, p.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn catalog() -> Catalog {
        Catalog::base_set()
    }

    #[test]
    fn test_affordable_at_filters_by_cost_and_stock() {
        let catalog = catalog();
        let copper = catalog.lookup("Copper").unwrap();
        let silver = catalog.lookup("Silver").unwrap();
        let estate = catalog.lookup("Estate").unwrap();

        let mut supply = Supply::new();
        supply.add_pile(copper, 10);
        supply.add_pile(silver, 10);
        supply.add_pile(estate, 1);

        assert_eq!(supply.affordable_at(2, &catalog), vec![copper, estate]);
        assert_eq!(supply.affordable_at(3, &catalog), vec![copper, silver, estate]);

        supply.take(estate);
        // Empty piles are never offered again.
        assert_eq!(supply.affordable_at(3, &catalog), vec![copper, silver]);
    }

    #[test]
    fn test_take_depletes() {
        let catalog = catalog();
        let copper = catalog.lookup("Copper").unwrap();

        let mut supply = Supply::new();
        supply.add_pile(copper, 2);

        supply.take(copper);
        assert_eq!(supply.remaining(copper), 1);
        supply.take(copper);
        assert_eq!(supply.remaining(copper), 0);
        assert_eq!(supply.exhausted_count(), 1);
    }

    #[test]
    #[should_panic(expected = "is empty")]
    fn test_take_from_empty_pile_panics() {
        let catalog = catalog();
        let copper = catalog.lookup("Copper").unwrap();

        let mut supply = Supply::new();
        supply.add_pile(copper, 0);
        supply.take(copper);
    }

    #[test]
    #[should_panic(expected = "No supply pile")]
    fn test_take_unknown_pile_panics() {
        let catalog = catalog();
        let mut supply = Supply::new();
        supply.take(catalog.lookup("Gold").unwrap());
    }

    #[test]
    fn test_flagship_is_highest_victory_tier() {
        let catalog = catalog();
        let estate = catalog.lookup("Estate").unwrap();
        let province = catalog.lookup("Province").unwrap();

        let mut supply = Supply::new();
        supply.add_pile(estate, 8);
        supply.add_pile(province, 8);

        assert_eq!(supply.flagship_victory(&catalog), Some(province));
    }

    #[test]
    fn test_flagship_absent_without_victory_piles() {
        let mut catalog = Catalog::new();
        let copper = catalog.add(Card::resource("Copper", 0, 1));

        let mut supply = Supply::new();
        supply.add_pile(copper, 10);

        assert_eq!(supply.flagship_victory(&catalog), None);
    }
}
