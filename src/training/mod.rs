//! Tabular Monte-Carlo training on top of the agent driver.

mod estimator;
mod evaluate;
mod policy;

pub use estimator::{TabularEstimator, ValueEstimator};
pub use evaluate::{mc_evaluate, EvalConfig, EvalStats, EvalSummary, RoundReport, Trainer};
pub use policy::{EpsilonGreedy, Greedy, Policy, PolicyAgent};
