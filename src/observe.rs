//! Observation broadcast: what agents are told about game events.
//!
//! Every state transition emits one or more observations. An observation
//! carries two renderings: a private text for its intended audience (which
//! may name a hidden card) and a public text for everyone else (which must
//! not). The log is append-only; a single cursor per game instance hands
//! each entry to the driver exactly once, in emission order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// An immutable record of one game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// The player entitled to the private rendering.
    pub audience: PlayerId,

    /// Rendering for the audience; may reveal hidden information.
    pub private: String,

    /// Rendering for everyone else; must not reveal hidden information.
    pub public: String,
}

impl Observation {
    /// An event with hidden information: the audience sees `private`,
    /// everyone else sees `public`.
    #[must_use]
    pub fn hidden(
        audience: PlayerId,
        private: impl Into<String>,
        public: impl Into<String>,
    ) -> Self {
        Self {
            audience,
            private: private.into(),
            public: public.into(),
        }
    }

    /// A fully public event: both renderings are identical.
    #[must_use]
    pub fn public(audience: PlayerId, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            audience,
            private: text.clone(),
            public: text,
        }
    }

    /// The rendering a given viewer is entitled to.
    #[must_use]
    pub fn text_for(&self, viewer: PlayerId) -> &str {
        if viewer == self.audience {
            &self.private
        } else {
            &self.public
        }
    }
}

/// Append-only observation log with publish-since-last-read semantics.
///
/// Entries are never mutated or removed. The persistent vector makes
/// cloning a whole game state O(1) despite the accumulated log.
#[derive(Clone, Debug, Default)]
pub struct ObservationLog {
    entries: Vector<Observation>,
    cursor: usize,
}

impl ObservationLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observation.
    pub fn append(&mut self, observation: Observation) {
        self.entries.push_back(observation);
    }

    /// Append a batch of observations in order.
    pub fn extend(&mut self, observations: impl IntoIterator<Item = Observation>) {
        for observation in observations {
            self.entries.push_back(observation);
        }
    }

    /// Return every entry appended since the previous call, advancing the
    /// cursor to the current length.
    pub fn publish_since(&mut self) -> Vec<Observation> {
        let new: Vec<_> = self.entries.iter().skip(self.cursor).cloned().collect();
        self.cursor = self.entries.len();
        new
    }

    /// All entries ever appended, in emission order.
    pub fn entries(&self) -> impl Iterator<Item = &Observation> {
        self.entries.iter()
    }

    /// Total number of entries appended.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
