//! Action-value estimation from Monte-Carlo returns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Catalog;
use crate::game::Alternative;

/// Predicts the value of an alternative and learns from externally
/// provided target values.
pub trait ValueEstimator {
    /// Estimated value of choosing this alternative (0 when unseen).
    fn predict(&self, alternative: &Alternative) -> f64;

    /// Update the estimate towards a target return.
    fn learn(&mut self, alternative: &Alternative, target: f64);
}

/// Tabular estimator keeping, per alternative, an occurrence count and
/// the running mean of the targets seen for it.
///
/// With a cap, the weight given to old observations is bounded, so the
/// estimate tracks a moving average instead of converging forever.
/// Snapshots serialize with `bincode` for checkpointing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TabularEstimator {
    cap: Option<u32>,
    estimates: FxHashMap<Alternative, (u32, f64)>,
}

impl TabularEstimator {
    /// Create an estimator with unbounded observation counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator whose old observations weigh at most `cap`.
    #[must_use]
    pub fn capped(cap: u32) -> Self {
        Self {
            cap: Some(cap),
            estimates: FxHashMap::default(),
        }
    }

    /// Number of times an alternative has been learned from.
    #[must_use]
    pub fn visits(&self, alternative: &Alternative) -> u32 {
        self.estimates.get(alternative).map_or(0, |(n, _)| *n)
    }

    /// Number of distinct alternatives seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Whether nothing has been learned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Serialize a checkpoint.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore from a checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }

    /// Render the table sorted by estimate, best first, for inspection.
    #[must_use]
    pub fn render(&self, catalog: &Catalog) -> String {
        let mut rows: Vec<_> = self.estimates.iter().collect();
        rows.sort_by(|(_, (an, aq)), (_, (bn, bq))| {
            bq.partial_cmp(aq)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(bn.cmp(an))
        });

        rows.iter()
            .map(|(alternative, (n, q))| {
                format!("{} : Q={}, N={}", alternative.describe(catalog), q, n)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ValueEstimator for TabularEstimator {
    fn predict(&self, alternative: &Alternative) -> f64 {
        self.estimates.get(alternative).map_or(0.0, |(_, q)| *q)
    }

    fn learn(&mut self, alternative: &Alternative, target: f64) {
        let (n, q) = self
            .estimates
            .get(alternative)
            .copied()
            .unwrap_or((0, 0.0));
        let weight = match self.cap {
            Some(cap) => n.min(cap),
            None => n,
        };

        let new_n = n + 1;
        let new_q = (weight as f64 * q + target) / (weight + 1) as f64;
        self.estimates.insert(*alternative, (new_n, new_q));
    }
}
