//! Decision-making agents and the in-process driver.
//!
//! Agents sit outside the engine: they receive observation text and the
//! offered alternatives, and answer with a selection index. The engine
//! never re-validates their input beyond the index bound - offering only
//! legal alternatives is the engine's job, picking one is the agent's.

mod runner;

pub use runner::play_match;

use std::io::{self, BufRead, Write};

use crate::cards::Catalog;
use crate::core::GameRng;
use crate::game::Alternative;

/// An external decision maker for one seat.
pub trait Agent {
    /// Receive one observation rendering.
    fn observe(&mut self, text: &str);

    /// Pick an index into the offered alternatives.
    fn choose(&mut self, catalog: &Catalog, alternatives: &[Alternative]) -> usize;
}

/// Picks uniformly at random from its own deterministic stream.
pub struct RandomAgent {
    rng: GameRng,
    echo: bool,
}

impl RandomAgent {
    /// Create a random agent with its own RNG stream.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng, echo: false }
    }

    /// Print received observations to stdout.
    #[must_use]
    pub fn with_echo(mut self) -> Self {
        self.echo = true;
        self
    }
}

impl Agent for RandomAgent {
    fn observe(&mut self, text: &str) {
        if self.echo {
            println!("{}", text);
        }
    }

    fn choose(&mut self, _catalog: &Catalog, alternatives: &[Alternative]) -> usize {
        self.rng.gen_range(0..alternatives.len())
    }
}

/// Prompts a human on stdin with a numbered menu.
#[derive(Default)]
pub struct HumanAgent;

impl HumanAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Agent for HumanAgent {
    fn observe(&mut self, text: &str) {
        println!("{}", text);
    }

    fn choose(&mut self, catalog: &Catalog, alternatives: &[Alternative]) -> usize {
        println!("Choose:");
        for (i, alternative) in alternatives.iter().enumerate() {
            println!("{:3} : {}", i, alternative.describe(catalog));
        }

        let stdin = io::stdin();
        loop {
            print!("Choose 0 to {} ", alternatives.len() - 1);
            let _ = io::stdout().flush();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                continue;
            }
            if let Ok(index) = line.trim().parse::<usize>() {
                if index < alternatives.len() {
                    return index;
                }
            }
        }
    }
}
