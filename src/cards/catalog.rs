//! The card catalog: process-wide immutable card definitions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Interning registry of card definitions.
///
/// Cards are added once at setup and looked up by `CardId` or name for
/// the lifetime of the game. IDs are assigned in registration order.
///
/// ```
/// use deckbuilder::cards::{Card, Catalog};
///
/// let mut catalog = Catalog::new();
/// let copper = catalog.add(Card::resource("Copper", 0, 1));
///
/// assert_eq!(catalog.get(copper).name, "Copper");
/// assert_eq!(catalog.lookup("Copper"), Some(copper));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    cards: Vec<Card>,
    by_name: FxHashMap<String, CardId>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default six-card set: three treasures and three victory tiers.
    #[must_use]
    pub fn base_set() -> Self {
        let mut catalog = Self::new();
        catalog.add(Card::resource("Copper", 0, 1));
        catalog.add(Card::resource("Silver", 3, 2));
        catalog.add(Card::resource("Gold", 6, 3));
        catalog.add(Card::victory("Estate", 2, 1));
        catalog.add(Card::victory("Duchy", 5, 3));
        catalog.add(Card::victory("Province", 8, 6));
        catalog
    }

    /// Intern a card definition, assigning its ID.
    ///
    /// Panics if the name is already registered.
    pub fn add(&mut self, mut card: Card) -> CardId {
        assert!(
            !self.by_name.contains_key(&card.name),
            "Card name {:?} already registered",
            card.name
        );

        let id = CardId::new(self.cards.len() as u32);
        card.id = id;
        self.by_name.insert(card.name.clone(), id);
        self.cards.push(card);
        id
    }

    /// Get a card definition by ID.
    ///
    /// Panics on an unknown ID - IDs only come from this catalog.
    #[must_use]
    pub fn get(&self, id: CardId) -> &Card {
        &self.cards[id.raw() as usize]
    }

    /// Look up a card ID by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Iterate over all cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of registered card kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_add_and_lookup() {
        let mut catalog = Catalog::new();
        let copper = catalog.add(Card::resource("Copper", 0, 1));
        let estate = catalog.add(Card::victory("Estate", 2, 1));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(copper).name, "Copper");
        assert_eq!(catalog.get(estate).kind, CardKind::Victory);
        assert_eq!(catalog.lookup("Estate"), Some(estate));
        assert_eq!(catalog.lookup("Moat"), None);
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let mut catalog = Catalog::new();
        let a = catalog.add(Card::resource("A", 0, 1));
        let b = catalog.add(Card::resource("B", 0, 1));

        assert_eq!(a, CardId::new(0));
        assert_eq!(b, CardId::new(1));

        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = Catalog::new();
        catalog.add(Card::resource("Copper", 0, 1));
        catalog.add(Card::victory("Copper", 2, 1));
    }

    #[test]
    fn test_base_set() {
        let catalog = Catalog::base_set();

        assert_eq!(catalog.len(), 6);

        let gold = catalog.get(catalog.lookup("Gold").unwrap());
        assert_eq!(gold.cost, 6);
        assert_eq!(gold.coin_value(), 3);

        let province = catalog.get(catalog.lookup("Province").unwrap());
        assert_eq!(province.vp, 6);
        assert_eq!(province.cost, 8);
    }
}
