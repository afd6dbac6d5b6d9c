use super::support::*;

#[test]
fn seeded_rounds_are_reproducible() {
    let config = GameConfig::new(3, 4);
    let left = Game::new(2024, config);
    let right = Game::new(2024, config);
    assert_eq!(left.snapshot_hash(), right.snapshot_hash());
    assert_eq!(left.state().cave, right.state().cave);
    assert_eq!(left.state().hazards, right.state().hazards);
    assert_eq!(left.current_room(), right.current_room());
}

#[test]
fn new_round_honors_configured_counts() {
    for seed in 0..100 {
        let config = GameConfig::new(4, 5);
        let game = Game::new(seed, config);
        let hazards = &game.state().hazards;
        let start = game.current_room();

        assert!((1..=4).contains(&hazards.creatures().len()));
        assert_eq!(hazards.bats().len(), 5);
        assert_eq!(hazards.pits().len(), 2);
        assert!(!hazards.has_bat(start) && !hazards.has_pit(start) && !hazards.has_creature(start));
        assert_eq!(game.arrows(), 8);
        assert_eq!(game.adjacent_rooms().len(), 3);
        assert_eq!(game.seed(), Some(seed));
    }
}

#[test]
fn injected_rng_drives_relabeling_start_and_placement() {
    // Three swaps, the start room, one creature, two bats, two pits.
    let script = [1, 2, 3, 4, 5, 6, 10, 11, 12, 13, 14, 15];
    let game = Game::with_rng(ScriptedRng::new(script), GameConfig::new(1, 2));

    let mut expected_cave = CaveGraph::canonical();
    expected_cave.relabel(room(1), room(2));
    expected_cave.relabel(room(3), room(4));
    expected_cave.relabel(room(5), room(6));

    assert_eq!(game.state().cave, expected_cave);
    assert_eq!(game.current_room(), room(10));
    let hazards = &game.state().hazards;
    assert_eq!(numbers(hazards.creatures()), [11]);
    assert_eq!(numbers(hazards.bats()), [12, 13]);
    assert_eq!(numbers(hazards.pits()), [14, 15]);
    assert_eq!(game.log(), &[LogEvent::RoundStarted { player: room(10) }]);
}

#[test]
fn placement_scenario_senses_then_wins_with_one_arrow() {
    let mut rng = ScriptedRng::new([5, 7, 10, 14]);
    let hazards = HazardSet::place(&mut rng, room(1), 1, 1, 2);
    let state = GameState {
        cave: CaveGraph::canonical(),
        hazards,
        player: Player { room: room(1), arrows: 5 },
    };
    let mut game = Game::from_state(state, GameConfig::new(1, 2), rng);

    assert_eq!(game.senses(), Senses::default());

    let report = game.apply(shoot(&[2, 4, 5])).unwrap();
    assert_eq!(game.arrows(), 4);
    assert_eq!(
        report.shot,
        Some(ShotReport { impact: room(5), flight: Flight::Struck, slain: true })
    );
    assert_eq!(report.outcome, Some(RoundOutcome::Won));
    assert_eq!(game.outcome(), Some(RoundOutcome::Won));
}

#[test]
fn senses_follow_the_player() {
    let game = staged_game(1, 5, Layout { creatures: &[2], bats: &[20], pits: &[8] }, &[]);
    assert_eq!(game.senses(), Senses { stench: true, noise: false, wind: true });
}

#[test]
fn move_targets_are_checked_against_the_current_room() {
    let game = staged_game(1, 5, Layout { creatures: &[20], ..Layout::default() }, &[]);
    assert!(game.can_move_to(room(2)));
    assert!(game.can_move_to(room(8)));
    assert!(!game.can_move_to(room(5)));
    assert!(!game.can_move_to(room(1)));
}
