use crate::config::GameConfig;
use crate::types::Action;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum InputPayload {
    Action(Action),
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            format_version: 1,
            build_id: "dev".to_string(),
            seed,
            config,
            inputs: Vec::new(),
        }
    }

    /// Records the next accepted action; sequence numbers count from zero.
    pub fn append_action(&mut self, action: Action) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload: InputPayload::Action(action) });
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
