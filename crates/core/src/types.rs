use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rooms in every cave.
pub const ROOM_COUNT: u8 = 20;

/// A room of the cave, numbered `1..=ROOM_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Room(pub(crate) u8);

impl Room {
    pub fn new(number: u32) -> Option<Self> {
        u8::try_from(number).ok().filter(|n| (1..=ROOM_COUNT).contains(n)).map(Self)
    }

    pub fn number(self) -> u32 {
        u32::from(self.0)
    }

    /// Every room in ascending order.
    pub fn all() -> impl Iterator<Item = Room> {
        (1..=ROOM_COUNT).map(Room)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Room {
    type Error = String;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("room {number} is outside 1..={ROOM_COUNT}"))
    }
}

impl From<Room> for u32 {
    fn from(room: Room) -> Self {
        room.number()
    }
}

/// Hints the player picks up from the rooms next to them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Senses {
    pub stench: bool,
    pub noise: bool,
    pub wind: bool,
}

/// One validated player command.
///
/// `Move` targets are trusted to be adjacent. `Shoot` paths are raw room
/// numbers as typed; entries that are out of range or not adjacent send the
/// arrow wild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move { to: Room },
    Shoot { path: Vec<u32> },
    Quit,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    OwnArrow,
    Creature,
    Pit,
    OutOfArrows,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost(DeathCause),
    Quit,
    Restart,
}

/// Why an arrow's flight stopped where it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flight {
    /// Entered a room holding a creature.
    Struck,
    /// Came back into the shooter's room.
    ReturnedToShooter,
    /// Out of range or took a tunnel that does not exist; landed in a random room.
    Wild,
    /// Ran out of path in an empty room.
    Spent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotReport {
    pub impact: Room,
    pub flight: Flight,
    /// The impact room held a creature, which is now gone.
    pub slain: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub shot: Option<ShotReport>,
    /// Rooms bats dropped the player into, in order.
    pub bat_drops: Vec<Room>,
    pub outcome: Option<RoundOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    RoundFinished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundFinished => write!(f, "the round is already over"),
        }
    }
}

impl std::error::Error for GameError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    RoundStarted { player: Room },
    PlayerMoved { from: Room, to: Room },
    ArrowFired { path_len: usize },
    ArrowLanded { impact: Room, flight: Flight },
    CreatureSlain { room: Room },
    CreaturesRelocated { count: usize },
    BatCarried { from: Room, to: Room },
    RoundEnded { outcome: RoundOutcome },
}
