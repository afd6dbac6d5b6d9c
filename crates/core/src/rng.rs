//! Injectable randomness for every decision a round makes.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::Room;

/// Source of uniform choices.
///
/// Callers always pass candidates in ascending room order so a given
/// generator state maps to the same decision on every run.
pub trait RoomRng {
    /// Uniform index in `0..len`. `len` is never zero.
    fn below(&mut self, len: usize) -> usize;

    fn pick(&mut self, candidates: &[Room]) -> Room {
        candidates[self.below(candidates.len())]
    }
}

impl RoomRng for ChaCha8Rng {
    fn below(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

impl<R: RoomRng + ?Sized> RoomRng for &mut R {
    fn below(&mut self, len: usize) -> usize {
        (**self).below(len)
    }

    fn pick(&mut self, candidates: &[Room]) -> Room {
        (**self).pick(candidates)
    }
}

/// Test double that answers every `pick` with the next scripted room.
///
/// # Panics
///
/// `pick` panics when the script is exhausted or when the scripted room is
/// not among the candidates, so a test fails at the decision that diverged.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rooms: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(rooms: impl IntoIterator<Item = u32>) -> Self {
        Self { rooms: rooms.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.rooms.len()
    }

    fn next_scripted(&mut self) -> u32 {
        match self.rooms.pop_front() {
            Some(number) => number,
            None => panic!("scripted rng ran out of rooms"),
        }
    }
}

impl RoomRng for ScriptedRng {
    /// Raw index draw: the next scripted number modulo `len`.
    fn below(&mut self, len: usize) -> usize {
        self.next_scripted() as usize % len
    }

    fn pick(&mut self, candidates: &[Room]) -> Room {
        let number = self.next_scripted();
        match candidates.iter().find(|room| room.number() == number) {
            Some(room) => *room,
            None => panic!("scripted room {number} is not among candidates {candidates:?}"),
        }
    }
}
