//! Self-play training run on the base set.

use deckbuilder::{Catalog, Trainer};

fn main() {
    let rounds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(5);

    let trainer = Trainer::default();
    let (estimator, reports) = trainer.run_rounds(rounds, 42);

    for report in &reports {
        println!(
            "round {:3} : {}{}",
            report.round,
            report.summary,
            if report.promoted { "  [promoted]" } else { "" }
        );
    }

    println!("\nLearned action values:");
    println!("{}", estimator.render(&Catalog::base_set()));
}
