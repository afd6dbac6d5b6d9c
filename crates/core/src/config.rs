//! Round configuration: hazard counts and the arrow allowance.

use serde::{Deserialize, Serialize};

use crate::types::ROOM_COUNT;

pub const MIN_CREATURES: u32 = 1;
pub const MAX_CREATURES: u32 = 19;
pub const MIN_BATS: u32 = 2;
pub const MAX_BATS: u32 = 17;
pub const DEFAULT_PITS: u32 = 2;
/// Arrows handed out on top of one per creature.
pub const EXTRA_ARROWS: u32 = 4;

/// Rooms available to bats and pits once the player's start is excluded.
const PLACEABLE_ROOMS: u32 = ROOM_COUNT as u32 - 1;

/// Validated round settings.
///
/// Every constructor clamps, so a `GameConfig` always describes a placement
/// that fits in the cave. Deserialized values go through the same clamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigFields", into = "ConfigFields")]
pub struct GameConfig {
    creature_count: u32,
    bat_count: u32,
    pit_count: u32,
    arrow_count: u32,
}

impl GameConfig {
    pub fn new(creatures: u32, bats: u32) -> Self {
        let creature_count = creatures.clamp(MIN_CREATURES, MAX_CREATURES);
        Self {
            creature_count,
            bat_count: bats.clamp(MIN_BATS, MAX_BATS),
            pit_count: DEFAULT_PITS,
            arrow_count: creature_count + EXTRA_ARROWS,
        }
    }

    /// Bats and pits never share rooms, so pits are capped by what bats leave free.
    pub fn with_pit_count(mut self, pits: u32) -> Self {
        self.pit_count = pits.min(PLACEABLE_ROOMS - self.bat_count);
        self
    }

    pub fn with_arrow_count(mut self, arrows: u32) -> Self {
        self.arrow_count = arrows.max(1);
        self
    }

    pub fn creature_count(&self) -> u32 {
        self.creature_count
    }

    pub fn bat_count(&self) -> u32 {
        self.bat_count
    }

    pub fn pit_count(&self) -> u32 {
        self.pit_count
    }

    pub fn arrow_count(&self) -> u32 {
        self.arrow_count
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MIN_CREATURES, MIN_BATS)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct ConfigFields {
    creature_count: u32,
    bat_count: u32,
    pit_count: u32,
    arrow_count: u32,
}

impl From<ConfigFields> for GameConfig {
    fn from(fields: ConfigFields) -> Self {
        GameConfig::new(fields.creature_count, fields.bat_count)
            .with_pit_count(fields.pit_count)
            .with_arrow_count(fields.arrow_count)
    }
}

impl From<GameConfig> for ConfigFields {
    fn from(config: GameConfig) -> Self {
        Self {
            creature_count: config.creature_count,
            bat_count: config.bat_count,
            pit_count: config.pit_count,
            arrow_count: config.arrow_count,
        }
    }
}
