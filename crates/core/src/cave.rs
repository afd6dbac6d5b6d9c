//! Fixed dodecahedral cave topology with per-round room relabeling.

use std::collections::BTreeSet;

use crate::rng::RoomRng;
use crate::types::Room;

mod hazards;

pub use hazards::HazardSet;

/// Directed tunnels of the unscrambled cave. Each room is a source exactly three times.
#[rustfmt::skip]
const CANONICAL_TUNNELS: [(u8, u8); 60] = [
    (1, 2), (1, 3), (1, 8),
    (2, 1), (2, 4), (2, 10),
    (3, 1), (3, 5), (3, 6),
    (4, 2), (4, 5), (4, 12),
    (5, 4), (5, 3), (5, 14),
    (6, 3), (6, 7), (6, 15),
    (7, 6), (7, 8), (7, 16),
    (8, 1), (8, 7), (8, 9),
    (9, 8), (9, 10), (9, 17),
    (10, 9), (10, 2), (10, 11),
    (11, 10), (11, 12), (11, 18),
    (12, 11), (12, 4), (12, 13),
    (13, 12), (13, 19), (13, 14),
    (14, 13), (14, 5), (14, 15),
    (15, 14), (15, 6), (15, 20),
    (16, 7), (16, 17), (16, 20),
    (17, 16), (17, 9), (17, 18),
    (18, 17), (18, 11), (18, 19),
    (19, 18), (19, 13), (19, 20),
    (20, 19), (20, 15), (20, 16),
];

/// Label swaps applied when a round's cave is built.
const RELABEL_SWAPS: usize = 3;

/// The cave owned by one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveGraph {
    tunnels: Vec<(Room, Room)>,
}

impl CaveGraph {
    pub fn canonical() -> Self {
        Self { tunnels: CANONICAL_TUNNELS.iter().map(|&(a, b)| (Room(a), Room(b))).collect() }
    }

    /// Canonical cave with up to three disjoint label swaps, so room numbers
    /// memorized in an earlier round no longer line up.
    pub fn scrambled(rng: &mut impl RoomRng) -> Self {
        let mut cave = Self::canonical();
        let mut pool: Vec<Room> = Room::all().collect();
        for _ in 0..RELABEL_SWAPS {
            let first = rng.pick(&pool);
            pool.retain(|room| *room != first);
            let second = rng.pick(&pool);
            pool.retain(|room| *room != second);
            cave.relabel(first, second);
        }
        cave
    }

    /// Exchanges two room labels on every tunnel end. Applying it twice is a no-op.
    pub fn relabel(&mut self, a: Room, b: Room) {
        let swap = |room: Room| {
            if room == a {
                b
            } else if room == b {
                a
            } else {
                room
            }
        };
        for (from, to) in &mut self.tunnels {
            *from = swap(*from);
            *to = swap(*to);
        }
    }

    pub fn adjacent(&self, room: Room) -> BTreeSet<Room> {
        self.tunnels.iter().filter(|(from, _)| *from == room).map(|(_, to)| *to).collect()
    }

    pub fn is_adjacent(&self, from: Room, to: Room) -> bool {
        self.tunnels.iter().any(|tunnel| *tunnel == (from, to))
    }

    pub fn tunnels(&self) -> &[(Room, Room)] {
        &self.tunnels
    }
}
