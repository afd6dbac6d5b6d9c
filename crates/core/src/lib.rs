pub mod cave;
pub mod config;
pub mod game;
pub mod journal;
pub mod replay;
pub mod rng;
pub mod state;
pub mod types;

pub use cave::{CaveGraph, HazardSet};
pub use config::GameConfig;
pub use game::Game;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use rng::{RoomRng, ScriptedRng};
pub use state::{GameState, Player};
pub use types::*;
