//! Monte-Carlo policy evaluation and the self-improvement loop.

use crate::agents::{play_match, Agent, RandomAgent};
use crate::core::{GameRng, PlayerId};
use crate::game::GameBuilder;

use super::estimator::{TabularEstimator, ValueEstimator};
use super::policy::{EpsilonGreedy, Greedy, Policy, PolicyAgent};

/// Rolling per-window statistics from the learner's point of view.
#[derive(Clone, Debug, Default)]
pub struct EvalStats {
    games: usize,
    wins: usize,
    turns: u64,
    scores: i64,
}

impl EvalStats {
    /// Create an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game.
    pub fn add(&mut self, won: bool, turns: u32, score: i64) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
        self.turns += u64::from(turns);
        self.scores += score;
    }

    /// Summarise the window.
    #[must_use]
    pub fn summary(&self) -> EvalSummary {
        let games = self.games.max(1) as f64;
        EvalSummary {
            games: self.games,
            win_rate: self.wins as f64 / games,
            average_turns: self.turns as f64 / games,
            average_score: self.scores as f64 / games,
        }
    }
}

/// Summary of one evaluation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalSummary {
    pub games: usize,
    pub win_rate: f64,
    pub average_turns: f64,
    pub average_score: f64,
}

impl std::fmt::Display for EvalSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "games = {}, win_rate = {:.3}, average_turns = {:.1}, average_score = {:.1}",
            self.games, self.win_rate, self.average_turns, self.average_score
        )
    }
}

/// Evaluation run parameters.
#[derive(Clone, Copy, Debug)]
pub struct EvalConfig {
    /// Games to play.
    pub games: usize,
    /// Window length for the rolling statistics.
    pub games_between_stats: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            games_between_stats: 100,
        }
    }
}

/// Play policy-vs-opponent games, feeding the terminal return (+1 for a
/// win, -1 otherwise) into the estimator for every decision the learner
/// made. The learner's seat is randomised each game.
///
/// Returns the summary of the final statistics window.
pub fn mc_evaluate(
    estimator: &mut TabularEstimator,
    policy: &dyn Policy,
    opponent: &mut dyn Agent,
    builder: &GameBuilder,
    config: &EvalConfig,
    rng: &mut GameRng,
) -> EvalSummary {
    assert!(config.games_between_stats > 0, "Window length must be positive");

    let mut window = EvalStats::new();
    for i in 0..config.games {
        if i % config.games_between_stats == 0 {
            window = EvalStats::new();
        }

        let mut game = builder.clone().build(rng.gen_seed());
        let learner_seat = if rng.gen_bool(0.5) {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        };

        let mut learner = PolicyAgent::new(policy, &*estimator, rng.fork());
        let stats = if learner_seat == PlayerId::new(0) {
            play_match(&mut game, &mut [&mut learner, &mut *opponent])
        } else {
            play_match(&mut game, &mut [&mut *opponent, &mut learner])
        };

        let won = stats.winner == learner_seat;
        let target = if won { 1.0 } else { -1.0 };
        for alternative in learner.into_decisions() {
            estimator.learn(&alternative, target);
        }

        window.add(won, stats.turns, stats.score);
    }

    window.summary()
}

/// Report of one training round.
#[derive(Clone, Copy, Debug)]
pub struct RoundReport {
    pub round: usize,
    pub summary: EvalSummary,
    /// Whether the learner was frozen as the new opponent.
    pub promoted: bool,
}

/// Self-improvement loop: learn against the current opponent and, once
/// the win rate clears the promotion threshold, freeze a greedy copy of
/// the learner's table as the next opponent.
///
/// The first opponent is uniformly random.
#[derive(Clone)]
pub struct Trainer {
    pub epsilon: f64,
    pub games_per_round: usize,
    pub games_between_stats: usize,
    pub promote_threshold: f64,
    pub builder: GameBuilder,
}

impl Default for Trainer {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            games_per_round: 1000,
            games_between_stats: 100,
            promote_threshold: 0.65,
            builder: GameBuilder::new(),
        }
    }
}

impl Trainer {
    /// Run a bounded number of training rounds.
    pub fn run_rounds(&self, rounds: usize, seed: u64) -> (TabularEstimator, Vec<RoundReport>) {
        let mut rng = GameRng::new(seed);
        let mut estimator = TabularEstimator::new();
        let mut frozen: Option<TabularEstimator> = None;
        let mut reports = Vec::with_capacity(rounds);

        let config = EvalConfig {
            games: self.games_per_round,
            games_between_stats: self.games_between_stats,
        };

        for round in 0..rounds {
            let policy = EpsilonGreedy::new(self.epsilon, Greedy);

            let summary = match &frozen {
                None => {
                    let mut opponent = RandomAgent::new(rng.fork());
                    mc_evaluate(
                        &mut estimator,
                        &policy,
                        &mut opponent,
                        &self.builder,
                        &config,
                        &mut rng,
                    )
                }
                Some(table) => {
                    let mut opponent = PolicyAgent::new(&Greedy, table, rng.fork());
                    mc_evaluate(
                        &mut estimator,
                        &policy,
                        &mut opponent,
                        &self.builder,
                        &config,
                        &mut rng,
                    )
                }
            };

            let promoted = summary.win_rate > self.promote_threshold;
            if promoted {
                frozen = Some(estimator.clone());
            }
            reports.push(RoundReport {
                round,
                summary,
                promoted,
            });
        }

        (estimator, reports)
    }
}
