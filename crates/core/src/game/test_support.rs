//! Shared fixtures for the `game` test suites.
//! Rounds here use the canonical cave and hand-placed hazards so every
//! random decision comes from an explicit script.

use super::*;
use crate::rng::ScriptedRng;

pub(super) fn room(number: u32) -> Room {
    Room::new(number).expect("fixture room numbers are in range")
}

pub(super) fn rooms(numbers: &[u32]) -> Vec<Room> {
    numbers.iter().copied().map(room).collect()
}

/// Hazard layout for a staged round, in canonical room numbers.
#[derive(Default)]
pub(super) struct Layout<'a> {
    pub(super) creatures: &'a [u32],
    pub(super) bats: &'a [u32],
    pub(super) pits: &'a [u32],
}

/// A round on the canonical cave where `rolls` answer every later random pick.
pub(super) fn staged_game(
    player: u32,
    arrows: u32,
    layout: Layout<'_>,
    rolls: &[u32],
) -> Game<ScriptedRng> {
    let hazards =
        HazardSet::from_rooms(rooms(layout.creatures), rooms(layout.bats), rooms(layout.pits));
    let config = GameConfig::new(layout.creatures.len() as u32, layout.bats.len() as u32)
        .with_arrow_count(arrows);
    let state = GameState {
        cave: CaveGraph::canonical(),
        hazards,
        player: Player { room: room(player), arrows },
    };
    Game::from_state(state, config, ScriptedRng::new(rolls.iter().copied()))
}

pub(super) fn shoot(path: &[u32]) -> Action {
    Action::Shoot { path: path.to_vec() }
}

pub(super) fn walk(to: u32) -> Action {
    Action::Move { to: room(to) }
}

pub(super) fn logged_relocations<R: RoomRng>(game: &Game<R>) -> usize {
    game.log().iter().filter(|event| matches!(event, LogEvent::CreaturesRelocated { .. })).count()
}

pub(super) fn numbers(rooms: &BTreeSet<Room>) -> Vec<u32> {
    rooms.iter().map(|room| room.number()).collect()
}
