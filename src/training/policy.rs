//! Selection policies over decision alternatives.

use crate::agents::Agent;
use crate::cards::Catalog;
use crate::core::GameRng;
use crate::game::Alternative;

use super::estimator::ValueEstimator;

/// Picks an index into the offered alternatives, given an estimator for
/// their values.
pub trait Policy {
    fn choose(
        &self,
        estimator: &dyn ValueEstimator,
        rng: &mut GameRng,
        alternatives: &[Alternative],
    ) -> usize;
}

/// Acts greedily on the estimated action values.
///
/// Ties go to the earliest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Policy for Greedy {
    fn choose(
        &self,
        estimator: &dyn ValueEstimator,
        _rng: &mut GameRng,
        alternatives: &[Alternative],
    ) -> usize {
        assert!(!alternatives.is_empty(), "Cannot choose from no alternatives");

        let mut best_index = 0;
        let mut best_value = estimator.predict(&alternatives[0]);
        for (index, alternative) in alternatives.iter().enumerate().skip(1) {
            let value = estimator.predict(alternative);
            if value > best_value {
                best_index = index;
                best_value = value;
            }
        }
        best_index
    }
}

/// Explores uniformly with probability epsilon, otherwise delegates.
pub struct EpsilonGreedy {
    epsilon: f64,
    inner: Box<dyn Policy>,
}

impl EpsilonGreedy {
    /// Wrap a policy with epsilon-uniform exploration.
    #[must_use]
    pub fn new(epsilon: f64, inner: impl Policy + 'static) -> Self {
        assert!((0.0..=1.0).contains(&epsilon), "Epsilon must be in [0, 1]");
        Self {
            epsilon,
            inner: Box::new(inner),
        }
    }
}

impl Policy for EpsilonGreedy {
    fn choose(
        &self,
        estimator: &dyn ValueEstimator,
        rng: &mut GameRng,
        alternatives: &[Alternative],
    ) -> usize {
        if rng.gen_bool(self.epsilon) {
            rng.gen_range(0..alternatives.len())
        } else {
            self.inner.choose(estimator, rng, alternatives)
        }
    }
}

/// An agent that ignores observations and acts by policy, recording each
/// chosen alternative for post-game learning.
pub struct PolicyAgent<'a> {
    policy: &'a dyn Policy,
    estimator: &'a dyn ValueEstimator,
    rng: GameRng,
    decisions: Vec<Alternative>,
}

impl<'a> PolicyAgent<'a> {
    /// Create a policy-driven agent with its own RNG stream.
    #[must_use]
    pub fn new(policy: &'a dyn Policy, estimator: &'a dyn ValueEstimator, rng: GameRng) -> Self {
        Self {
            policy,
            estimator,
            rng,
            decisions: Vec::new(),
        }
    }

    /// The alternatives chosen over the game, in order.
    #[must_use]
    pub fn decisions(&self) -> &[Alternative] {
        &self.decisions
    }

    /// Consume the agent, keeping its recorded decisions.
    #[must_use]
    pub fn into_decisions(self) -> Vec<Alternative> {
        self.decisions
    }
}

impl Agent for PolicyAgent<'_> {
    fn observe(&mut self, _text: &str) {}

    fn choose(&mut self, _catalog: &Catalog, alternatives: &[Alternative]) -> usize {
        let index = self.policy.choose(self.estimator, &mut self.rng, alternatives);
        self.decisions.push(alternatives[index]);
        index
    }
}
