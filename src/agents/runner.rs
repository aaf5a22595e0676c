//! The driver loop wiring agents to the engine.

use crate::core::PlayerId;
use crate::game::{Game, GameStats, Step};
use crate::observe::Observation;

use super::Agent;

/// Play one game to completion, one agent per seat.
///
/// Repeatedly asks the engine for the next decision, forwards new
/// observations to every agent (the private rendering to the audience,
/// the public one to everyone else), and feeds the deciding agent's
/// selection back into the engine. Returns the final statistics.
pub fn play_match(game: &mut Game, agents: &mut [&mut dyn Agent]) -> GameStats {
    assert_eq!(
        agents.len(),
        game.player_count(),
        "One agent per seat required"
    );

    let mut step = game.first_choice();
    loop {
        match step {
            Step::Decision(decision) => {
                broadcast(agents, &decision.observations);

                let seat = decision.choice.player.index();
                let alternatives = &decision.choice.alternatives;
                let index = agents[seat].choose(game.catalog(), alternatives);
                assert!(
                    index < alternatives.len(),
                    "Agent for seat {} returned out-of-range index {}",
                    seat,
                    index
                );

                let chosen = alternatives[index];
                step = game.next_choice(&chosen);
            }
            Step::GameOver(observations) => {
                broadcast(agents, &observations);
                return game.stats();
            }
        }
    }
}

fn broadcast(agents: &mut [&mut dyn Agent], observations: &[Observation]) {
    for observation in observations {
        for (seat, agent) in agents.iter_mut().enumerate() {
            agent.observe(observation.text_for(PlayerId::new(seat as u8)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::cards::{Card, Catalog};
    use crate::core::GameRng;
    use crate::game::GameBuilder;

    fn quick_game(seed: u64) -> Game {
        let mut catalog = Catalog::new();
        catalog.add(Card::resource("Copper", 0, 1));
        catalog.add(Card::victory("Estate", 2, 1));
        catalog.add(Card::victory("Province", 2, 6));

        GameBuilder::new()
            .catalog(catalog)
            .pile("Copper", 5)
            .pile("Estate", 2)
            .pile("Province", 2)
            .build(seed)
    }

    #[test]
    fn test_random_match_completes() {
        let mut game = quick_game(42);
        let mut a = RandomAgent::new(GameRng::new(1));
        let mut b = RandomAgent::new(GameRng::new(2));

        let stats = play_match(&mut game, &mut [&mut a, &mut b]);

        assert!(game.is_game_over());
        assert!(stats.turns >= 1);
        assert_eq!(stats.winner, game.winner().0);
    }

    #[test]
    fn test_match_is_deterministic() {
        let run = || {
            let mut game = quick_game(42);
            let mut a = RandomAgent::new(GameRng::new(1));
            let mut b = RandomAgent::new(GameRng::new(2));
            let stats = play_match(&mut game, &mut [&mut a, &mut b]);
            let log: Vec<_> = game.log().entries().cloned().collect();
            (stats, log)
        };

        let (stats1, log1) = run();
        let (stats2, log2) = run();

        assert_eq!(stats1, stats2);
        assert_eq!(log1, log2);
    }

    #[test]
    #[should_panic(expected = "One agent per seat")]
    fn test_agent_count_mismatch_panics() {
        let mut game = quick_game(42);
        let mut a = RandomAgent::new(GameRng::new(1));
        play_match(&mut game, &mut [&mut a]);
    }
}
