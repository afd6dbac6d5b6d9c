//! Creature, bat and pit placement over a cave, and the senses they give off.
//!
//! Creatures are drawn with replacement from every room but the player's
//! start and never shrink the pool, so they may share rooms with each other,
//! bats or pits. Bats and then pits are drawn without replacement from the
//! same pool, so they never share a room with each other or the start.

use std::collections::BTreeSet;

use crate::rng::RoomRng;
use crate::types::{Room, Senses};

use super::CaveGraph;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardSet {
    creatures: BTreeSet<Room>,
    bats: BTreeSet<Room>,
    pits: BTreeSet<Room>,
}

impl HazardSet {
    /// Places hazards around `player_start`.
    ///
    /// Draws stop early if bats and pits would exhaust the pool, which a
    /// clamped `GameConfig` never asks for.
    pub fn place(
        rng: &mut impl RoomRng,
        player_start: Room,
        creature_count: u32,
        bat_count: u32,
        pit_count: u32,
    ) -> Self {
        let mut pool: Vec<Room> = Room::all().filter(|room| *room != player_start).collect();
        let mut hazards = Self::default();

        for _ in 0..creature_count {
            hazards.creatures.insert(rng.pick(&pool));
        }
        for _ in 0..bat_count {
            let Some(room) = draw_exclusive(rng, &mut pool) else { break };
            hazards.bats.insert(room);
        }
        for _ in 0..pit_count {
            let Some(room) = draw_exclusive(rng, &mut pool) else { break };
            hazards.pits.insert(room);
        }
        hazards
    }

    pub fn from_rooms(
        creatures: impl IntoIterator<Item = Room>,
        bats: impl IntoIterator<Item = Room>,
        pits: impl IntoIterator<Item = Room>,
    ) -> Self {
        Self {
            creatures: creatures.into_iter().collect(),
            bats: bats.into_iter().collect(),
            pits: pits.into_iter().collect(),
        }
    }

    pub fn creatures(&self) -> &BTreeSet<Room> {
        &self.creatures
    }

    pub fn bats(&self) -> &BTreeSet<Room> {
        &self.bats
    }

    pub fn pits(&self) -> &BTreeSet<Room> {
        &self.pits
    }

    pub fn has_creature(&self, room: Room) -> bool {
        self.creatures.contains(&room)
    }

    pub fn has_bat(&self, room: Room) -> bool {
        self.bats.contains(&room)
    }

    pub fn has_pit(&self, room: Room) -> bool {
        self.pits.contains(&room)
    }

    /// Returns whether a creature was there.
    pub fn remove_creature(&mut self, room: Room) -> bool {
        self.creatures.remove(&room)
    }

    /// Creatures that wander into the same room merge into one.
    pub(crate) fn replace_creatures(&mut self, creatures: BTreeSet<Room>) {
        self.creatures = creatures;
    }

    pub fn sense(&self, cave: &CaveGraph, room: Room) -> Senses {
        let neighbors = cave.adjacent(room);
        Senses {
            stench: neighbors.iter().any(|r| self.creatures.contains(r)),
            noise: neighbors.iter().any(|r| self.bats.contains(r)),
            wind: neighbors.iter().any(|r| self.pits.contains(r)),
        }
    }
}

fn draw_exclusive(rng: &mut impl RoomRng, pool: &mut Vec<Room>) -> Option<Room> {
    if pool.is_empty() {
        return None;
    }
    let room = rng.pick(pool);
    pool.retain(|candidate| *candidate != room);
    Some(room)
}
