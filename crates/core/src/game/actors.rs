//! Player movement and creature wandering.

use super::*;

impl<R: RoomRng> Game<R> {
    pub(super) fn move_player(&mut self, to: Room) {
        let from = self.state.player.room;
        self.state.player.move_to(to);
        self.log.push(LogEvent::PlayerMoved { from, to });
    }

    /// Every creature steps to a random neighbor or stays put, each with equal odds.
    pub(super) fn relocate_creatures(&mut self) {
        let relocated = wander(&self.state.cave, self.state.hazards.creatures(), &mut self.rng);
        self.log.push(LogEvent::CreaturesRelocated { count: relocated.len() });
        self.state.hazards.replace_creatures(relocated);
    }
}

fn wander(cave: &CaveGraph, creatures: &BTreeSet<Room>, rng: &mut impl RoomRng) -> BTreeSet<Room> {
    creatures
        .iter()
        .map(|&room| {
            let mut options = cave.adjacent(room);
            options.insert(room);
            let options: Vec<Room> = options.into_iter().collect();
            rng.pick(&options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn room(number: u32) -> Room {
        Room::new(number).unwrap()
    }

    #[test]
    fn creatures_may_stay_or_step_to_a_neighbor() {
        let cave = CaveGraph::canonical();
        let creatures: BTreeSet<Room> = [room(1), room(20)].into();
        let mut rng = ScriptedRng::new([1, 16]);
        let moved = wander(&cave, &creatures, &mut rng);
        assert_eq!(moved, BTreeSet::from([room(1), room(16)]));
    }

    #[test]
    #[should_panic(expected = "not among candidates")]
    fn creatures_never_jump_past_their_neighbors() {
        let cave = CaveGraph::canonical();
        let creatures: BTreeSet<Room> = [room(1)].into();
        let mut rng = ScriptedRng::new([4]);
        wander(&cave, &creatures, &mut rng);
    }

    #[test]
    fn creatures_meeting_in_one_room_merge() {
        let cave = CaveGraph::canonical();
        let creatures: BTreeSet<Room> = [room(1), room(3)].into();
        let mut rng = ScriptedRng::new([3, 3]);
        let moved = wander(&cave, &creatures, &mut rng);
        assert_eq!(moved, BTreeSet::from([room(3)]));
    }
}
