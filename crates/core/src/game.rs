//! One round: the cave, its hazards, the player and the turn engine.
//! Turn handling lives in focused submodules that extend `Game`.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::cave::{CaveGraph, HazardSet};
use crate::config::GameConfig;
use crate::rng::RoomRng;
use crate::state::{GameState, Player};
use crate::types::*;

mod actors;
mod trajectory;
mod turn;

pub use trajectory::{ARROW_RANGE, Trajectory, resolve_trajectory};

#[cfg(test)]
mod test_support;

pub struct Game<R: RoomRng = ChaCha8Rng> {
    seed: Option<u64>,
    config: GameConfig,
    turn: u64,
    rng: R,
    state: GameState,
    log: Vec<LogEvent>,
    outcome: Option<RoundOutcome>,
}

impl Game<ChaCha8Rng> {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut game = Self::with_rng(ChaCha8Rng::seed_from_u64(seed), config);
        game.seed = Some(seed);
        game
    }
}

impl<R: RoomRng> Game<R> {
    /// Scrambles the cave, drops the player into a random room and places hazards.
    pub fn with_rng(mut rng: R, config: GameConfig) -> Self {
        let cave = CaveGraph::scrambled(&mut rng);
        let rooms: Vec<Room> = Room::all().collect();
        let player_start = rng.pick(&rooms);
        Self::from_parts(cave, player_start, config, rng)
    }

    /// Keeps `cave` as given and starts the player in `player_start`.
    pub fn from_parts(cave: CaveGraph, player_start: Room, config: GameConfig, mut rng: R) -> Self {
        let hazards = HazardSet::place(
            &mut rng,
            player_start,
            config.creature_count(),
            config.bat_count(),
            config.pit_count(),
        );
        let player = Player { room: player_start, arrows: config.arrow_count() };
        Self::from_state(GameState { cave, hazards, player }, config, rng)
    }

    /// Starts a round from a fully described state, placing nothing.
    pub fn from_state(state: GameState, config: GameConfig, rng: R) -> Self {
        let player = state.player.room;
        Self {
            seed: None,
            config,
            turn: 0,
            rng,
            state,
            log: vec![LogEvent::RoundStarted { player }],
            outcome: None,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Move and shoot actions applied so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn current_room(&self) -> Room {
        self.state.player.room
    }

    pub fn arrows(&self) -> u32 {
        self.state.player.arrows
    }

    pub fn adjacent_rooms(&self) -> BTreeSet<Room> {
        self.state.cave.adjacent(self.current_room())
    }

    pub fn can_move_to(&self, room: Room) -> bool {
        self.state.cave.is_adjacent(self.current_room(), room)
    }

    pub fn senses(&self) -> Senses {
        self.state.hazards.sense(&self.state.cave, self.current_room())
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed.unwrap_or_default());
        hasher.write_u64(self.turn);
        hasher.write_u32(self.state.player.room.number());
        hasher.write_u32(self.state.player.arrows);

        let hazards = &self.state.hazards;
        for rooms in [hazards.creatures(), hazards.bats(), hazards.pits()] {
            hasher.write_usize(rooms.len());
            for room in rooms {
                hasher.write_u32(room.number());
            }
        }
        for (from, to) in self.state.cave.tunnels() {
            hasher.write_u32(from.number());
            hasher.write_u32(to.number());
        }
        if let Some(outcome) = self.outcome {
            hasher.write_u8(outcome_code(outcome));
        }

        hasher.finish()
    }
}

fn outcome_code(outcome: RoundOutcome) -> u8 {
    match outcome {
        RoundOutcome::Won => 1,
        RoundOutcome::Lost(DeathCause::OwnArrow) => 2,
        RoundOutcome::Lost(DeathCause::Creature) => 3,
        RoundOutcome::Lost(DeathCause::Pit) => 4,
        RoundOutcome::Lost(DeathCause::OutOfArrows) => 5,
        RoundOutcome::Quit => 6,
        RoundOutcome::Restart => 7,
    }
}
