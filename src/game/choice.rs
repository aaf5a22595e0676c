//! Decision requests and their alternatives.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Catalog};
use crate::core::PlayerId;
use crate::observe::Observation;

/// One selectable action within a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alternative {
    /// Play the named resource card from hand.
    Play(CardId),
    /// Purchase the named card from the supply.
    Buy(CardId),
    /// End the turn.
    EndTurn,
}

impl Alternative {
    /// Human-readable rendering, for menus and logs.
    #[must_use]
    pub fn describe(&self, catalog: &Catalog) -> String {
        match self {
            Alternative::Play(card) => format!("Play {}", catalog.get(*card).name),
            Alternative::Buy(card) => format!("Buy {}", catalog.get(*card).name),
            Alternative::EndTurn => "End turn".to_string(),
        }
    }
}

/// A decision request addressed to exactly one player.
///
/// The alternatives are ordered, mutually exclusive, deduplicated, and
/// never empty - ending the turn is always legal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The player who must decide.
    pub player: PlayerId,

    /// The legal alternatives, in presentation order.
    pub alternatives: Vec<Alternative>,
}

impl Choice {
    /// Whether an alternative belongs to this choice's offered set.
    #[must_use]
    pub fn offers(&self, alternative: &Alternative) -> bool {
        self.alternatives.contains(alternative)
    }
}

/// A decision request paired with the observations published since the
/// previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// New observations, in emission order.
    pub observations: Vec<Observation>,

    /// The decision to make.
    pub choice: Choice,
}

/// Result of advancing the state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// The game continues; a decision is outstanding.
    Decision(Decision),

    /// The game is over; these are the final unpublished observations.
    GameOver(Vec<Observation>),
}

impl Step {
    /// The contained decision, panicking on game over.
    ///
    /// Convenient in tests and drivers that know the game continues.
    #[must_use]
    pub fn expect_decision(self) -> Decision {
        match self {
            Step::Decision(decision) => decision,
            Step::GameOver(_) => panic!("Expected a decision but the game is over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let catalog = Catalog::base_set();
        let copper = catalog.lookup("Copper").unwrap();

        assert_eq!(Alternative::Play(copper).describe(&catalog), "Play Copper");
        assert_eq!(Alternative::Buy(copper).describe(&catalog), "Buy Copper");
        assert_eq!(Alternative::EndTurn.describe(&catalog), "End turn");
    }

    #[test]
    fn test_choice_offers() {
        let catalog = Catalog::base_set();
        let copper = catalog.lookup("Copper").unwrap();
        let gold = catalog.lookup("Gold").unwrap();

        let choice = Choice {
            player: PlayerId::new(0),
            alternatives: vec![Alternative::Play(copper), Alternative::EndTurn],
        };

        assert!(choice.offers(&Alternative::Play(copper)));
        assert!(choice.offers(&Alternative::EndTurn));
        assert!(!choice.offers(&Alternative::Buy(copper)));
        assert!(!choice.offers(&Alternative::Play(gold)));
    }

    #[test]
    #[should_panic(expected = "game is over")]
    fn test_expect_decision_on_game_over() {
        let _ = Step::GameOver(vec![]).expect_decision();
    }

    #[test]
    fn test_alternative_serialization() {
        let alt = Alternative::Play(CardId::new(3));
        let json = serde_json::to_string(&alt).unwrap();
        let deserialized: Alternative = serde_json::from_str(&json).unwrap();

        assert_eq!(alt, deserialized);
    }
}
