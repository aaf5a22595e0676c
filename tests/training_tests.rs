//! End-to-end training tests on a tiny supply.

use deckbuilder::{
    mc_evaluate, Alternative, Card, Catalog, EpsilonGreedy, EvalConfig, GameBuilder, GameRng,
    Greedy, Policy, PolicyAgent, RandomAgent, TabularEstimator, Trainer, ValueEstimator,
};

fn quick_builder() -> GameBuilder {
    let mut catalog = Catalog::new();
    catalog.add(Card::resource("Copper", 0, 1));
    catalog.add(Card::victory("Estate", 2, 1));
    catalog.add(Card::victory("Province", 2, 6));

    GameBuilder::new()
        .catalog(catalog)
        .pile("Copper", 5)
        .pile("Estate", 3)
        .pile("Province", 2)
}

#[test]
fn test_mc_evaluate_populates_the_table() {
    let mut estimator = TabularEstimator::new();
    let policy = EpsilonGreedy::new(1.0, Greedy);
    let mut opponent = RandomAgent::new(GameRng::new(5));
    let config = EvalConfig {
        games: 50,
        games_between_stats: 25,
    };
    let mut rng = GameRng::new(11);

    let summary = mc_evaluate(
        &mut estimator,
        &policy,
        &mut opponent,
        &quick_builder(),
        &config,
        &mut rng,
    );

    assert_eq!(summary.games, 25);
    assert!(!estimator.is_empty());
    // Ending the turn is always offered, so fully random play visits it.
    assert!(estimator.visits(&Alternative::EndTurn) > 0);
}

#[test]
fn test_mc_evaluate_is_deterministic() {
    let run = || {
        let mut estimator = TabularEstimator::new();
        let policy = EpsilonGreedy::new(0.3, Greedy);
        let mut opponent = RandomAgent::new(GameRng::new(5));
        let config = EvalConfig {
            games: 30,
            games_between_stats: 30,
        };
        let mut rng = GameRng::new(11);
        let summary = mc_evaluate(
            &mut estimator,
            &policy,
            &mut opponent,
            &quick_builder(),
            &config,
            &mut rng,
        );
        (summary.win_rate, estimator.len())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_greedy_learner_prefers_the_flagship() {
    // After enough exploratory games, buying the 6-point Province should
    // estimate at least as well as ending the turn.
    let builder = quick_builder();
    let mut estimator = TabularEstimator::new();
    let policy = EpsilonGreedy::new(0.5, Greedy);
    let mut opponent = RandomAgent::new(GameRng::new(2));
    let config = EvalConfig {
        games: 400,
        games_between_stats: 400,
    };
    let mut rng = GameRng::new(13);

    mc_evaluate(
        &mut estimator,
        &policy,
        &mut opponent,
        &builder,
        &config,
        &mut rng,
    );

    let province = builder_catalog_lookup(&builder, "Province");
    assert!(
        estimator.predict(&Alternative::Buy(province))
            >= estimator.predict(&Alternative::EndTurn)
    );
}

fn builder_catalog_lookup(builder: &GameBuilder, name: &str) -> deckbuilder::CardId {
    builder
        .clone()
        .build(0)
        .catalog()
        .lookup(name)
        .expect("card in catalog")
}

#[test]
fn test_policy_agent_plays_a_full_game() {
    let mut game = quick_builder().build(21);
    let estimator = TabularEstimator::new();
    let mut learner = PolicyAgent::new(&Greedy, &estimator, GameRng::new(1));
    let mut opponent = RandomAgent::new(GameRng::new(2));

    let stats = deckbuilder::play_match(&mut game, &mut [&mut learner, &mut opponent]);

    assert!(game.is_game_over());
    assert!(stats.turns >= 1);
    assert!(!learner.decisions().is_empty());
}

#[test]
fn test_trainer_promotes_only_above_threshold() {
    let trainer = Trainer {
        games_per_round: 20,
        games_between_stats: 20,
        promote_threshold: 1.1,
        builder: quick_builder(),
        ..Trainer::default()
    };

    // A threshold above 1.0 can never be cleared.
    let (_, reports) = trainer.run_rounds(3, 8);
    assert!(reports.iter().all(|r| !r.promoted));
}

#[test]
fn test_estimator_checkpoint_survives_training() {
    let trainer = Trainer {
        games_per_round: 20,
        games_between_stats: 10,
        builder: quick_builder(),
        ..Trainer::default()
    };
    let (estimator, _) = trainer.run_rounds(1, 99);

    let bytes = estimator.to_bytes().expect("serialize");
    let restored = TabularEstimator::from_bytes(&bytes).expect("deserialize");

    assert_eq!(restored.len(), estimator.len());
    assert_eq!(
        restored.predict(&Alternative::EndTurn),
        estimator.predict(&Alternative::EndTurn)
    );
}

#[test]
fn test_epsilon_greedy_policy_object_is_usable_behind_dyn() {
    let estimator = TabularEstimator::new();
    let policy: Box<dyn Policy> = Box::new(EpsilonGreedy::new(0.2, Greedy));
    let mut rng = GameRng::new(0);

    let alternatives = [Alternative::EndTurn];
    assert_eq!(policy.choose(&estimator, &mut rng, &alternatives), 0);
}
