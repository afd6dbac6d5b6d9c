use crate::cave::{CaveGraph, HazardSet};
use crate::types::Room;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub room: Room,
    pub arrows: u32,
}

impl Player {
    /// Trusts the caller to have checked that `target` is next door.
    pub fn move_to(&mut self, target: Room) {
        self.room = target;
    }

    /// Every shot costs one arrow, whatever it hits.
    pub(crate) fn spend_arrow(&mut self) {
        self.arrows = self.arrows.saturating_sub(1);
    }
}

/// Everything one round owns.
#[derive(Clone, Debug)]
pub struct GameState {
    pub cave: CaveGraph,
    pub hazards: HazardSet,
    pub player: Player,
}
