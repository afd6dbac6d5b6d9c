//! Arrow flight resolution.

use super::*;

/// Tunnels an arrow can travel before it goes wild.
pub const ARROW_RANGE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trajectory {
    pub impact: Room,
    pub flight: Flight,
}

/// Follows `path` tunnel by tunnel from `start`.
///
/// The flight stops at the first room holding a creature, or on coming back
/// into `start`. A sixth step, or a step to a room that is not next to the
/// arrow, sends it wild into a uniformly random room and ignores the rest of
/// the path. A path that runs out leaves the arrow in the last room it
/// reached.
pub fn resolve_trajectory(
    cave: &CaveGraph,
    hazards: &HazardSet,
    start: Room,
    path: &[u32],
    rng: &mut impl RoomRng,
) -> Trajectory {
    let mut current = start;
    for (step, &number) in path.iter().enumerate() {
        let next = Room::new(number)
            .filter(|room| step < ARROW_RANGE && cave.is_adjacent(current, *room));
        let Some(next) = next else {
            let rooms: Vec<Room> = Room::all().collect();
            return Trajectory { impact: rng.pick(&rooms), flight: Flight::Wild };
        };

        current = next;
        if current == start {
            return Trajectory { impact: current, flight: Flight::ReturnedToShooter };
        }
        if hazards.has_creature(current) {
            return Trajectory { impact: current, flight: Flight::Struck };
        }
    }
    Trajectory { impact: current, flight: Flight::Spent }
}
