//! Play one game against a random opponent on the base set.

use deckbuilder::{play_match, GameBuilder, GameRng, HumanAgent, RandomAgent};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut game = GameBuilder::new().build(seed);
    let mut human = HumanAgent::new();
    let mut opponent = RandomAgent::new(GameRng::new(seed ^ 1));

    println!("You are Player 0. Seed {}.", seed);
    let stats = play_match(&mut game, &mut [&mut human, &mut opponent]);

    println!(
        "{} wins with {} points after {} turns.",
        stats.winner, stats.score, stats.turns
    );
}
