use super::support::*;

#[test]
fn walking_into_a_pit_loses() {
    let layout = Layout { creatures: &[20], pits: &[2], ..Layout::default() };
    let mut game = staged_game(1, 5, layout, &[]);
    let report = game.apply(walk(2)).unwrap();
    assert_eq!(report.outcome, Some(RoundOutcome::Lost(DeathCause::Pit)));
    assert_eq!(game.current_room(), room(2));
}

#[test]
fn walking_into_a_creature_loses() {
    let mut game = staged_game(1, 5, Layout { creatures: &[8], ..Layout::default() }, &[]);
    let report = game.apply(walk(8)).unwrap();
    assert_eq!(report.outcome, Some(RoundOutcome::Lost(DeathCause::Creature)));
}

#[test]
fn creature_is_checked_before_the_pit_it_shares() {
    let layout = Layout { creatures: &[3], pits: &[3], ..Layout::default() };
    let mut game = staged_game(1, 5, layout, &[]);
    let report = game.apply(walk(3)).unwrap();
    assert_eq!(report.outcome, Some(RoundOutcome::Lost(DeathCause::Creature)));
}

#[test]
fn creature_sharing_a_bat_room_wins_over_the_bat() {
    let layout = Layout { creatures: &[3], bats: &[3], ..Layout::default() };
    let mut game = staged_game(1, 5, layout, &[]);
    let report = game.apply(walk(3)).unwrap();
    assert_eq!(report.outcome, Some(RoundOutcome::Lost(DeathCause::Creature)));
    assert!(report.bat_drops.is_empty());
}

#[test]
fn bats_can_chain_before_a_safe_landing() {
    let layout = Layout { creatures: &[20], bats: &[2, 7], ..Layout::default() };
    let mut game = staged_game(1, 5, layout, &[7, 2, 11]);
    let report = game.apply(walk(2)).unwrap();

    assert_eq!(report.bat_drops, rooms(&[7, 2, 11]));
    assert_eq!(report.outcome, None);
    assert_eq!(game.current_room(), room(11));
    let carries = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::BatCarried { .. }))
        .count();
    assert_eq!(carries, 3);
}

#[test]
fn bats_may_drop_the_player_into_a_pit() {
    let layout = Layout { creatures: &[20], bats: &[2], pits: &[14] };
    let mut game = staged_game(1, 5, layout, &[14]);
    let report = game.apply(walk(2)).unwrap();
    assert_eq!(report.bat_drops, rooms(&[14]));
    assert_eq!(report.outcome, Some(RoundOutcome::Lost(DeathCause::Pit)));
}

#[test]
fn bats_may_drop_the_player_onto_a_creature() {
    let layout = Layout { creatures: &[20], bats: &[8], ..Layout::default() };
    let mut game = staged_game(1, 5, layout, &[20]);
    let report = game.apply(walk(8)).unwrap();
    assert_eq!(report.outcome, Some(RoundOutcome::Lost(DeathCause::Creature)));
}

#[test]
fn moving_never_wakes_the_creatures() {
    let mut game = staged_game(1, 5, Layout { creatures: &[20], ..Layout::default() }, &[]);
    game.apply(walk(2)).unwrap();
    game.apply(walk(4)).unwrap();

    assert_eq!(logged_relocations(&game), 0);
    assert_eq!(numbers(game.state().hazards.creatures()), [20]);
    assert_eq!(game.arrows(), 5);
    assert_eq!(game.turn(), 2);
}

#[test]
fn quit_and_restart_end_the_round_without_a_turn() {
    for (action, outcome) in
        [(Action::Quit, RoundOutcome::Quit), (Action::Restart, RoundOutcome::Restart)]
    {
        let mut game = staged_game(1, 5, Layout { creatures: &[20], ..Layout::default() }, &[]);
        let report = game.apply(action).unwrap();
        assert_eq!(report, TurnReport { outcome: Some(outcome), ..TurnReport::default() });
        assert_eq!(game.turn(), 0);
        assert_eq!(game.arrows(), 5);
        assert_eq!(game.log().last(), Some(&LogEvent::RoundEnded { outcome }));
    }
}

#[test]
fn seeded_rounds_always_settle_after_each_action() {
    for seed in 0..40 {
        let mut game = Game::new(seed, GameConfig::new(3, 17));
        for _ in 0..30 {
            if game.is_finished() {
                break;
            }
            let next = *game.adjacent_rooms().iter().next().unwrap();
            let report = game.apply(Action::Move { to: next }).unwrap();
            let room = game.current_room();
            let hazards = &game.state().hazards;
            if report.outcome.is_none() {
                assert!(!hazards.has_bat(room) && !hazards.has_pit(room));
                assert!(!hazards.has_creature(room));
            }
        }
    }
}
