//! Startup settings: an optional TOML file, overridden by command-line flags.

use crate::seed::SeedChoice;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use wumpus_core::GameConfig;

/// Contents of a settings file. Every key is optional.
///
/// ```toml
/// creatures = 3
/// bats = 4
/// pits = 2
/// seed = 2026
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub creatures: Option<u32>,
    pub bats: Option<u32>,
    pub pits: Option<u32>,
    pub seed: Option<u64>,
}

impl SettingsFile {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }
}

/// Values given on the command line; each one beats the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub creatures: Option<u32>,
    pub bats: Option<u32>,
    pub pits: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub config: GameConfig,
    pub seed: SeedChoice,
}

impl Settings {
    /// Merges flags over the file. Counts are clamped by `GameConfig`, and
    /// `generated_seed` is used only when neither source names a seed.
    pub fn resolve(file: SettingsFile, overrides: Overrides, generated_seed: u64) -> Self {
        let defaults = GameConfig::default();
        let creatures =
            overrides.creatures.or(file.creatures).unwrap_or(defaults.creature_count());
        let bats = overrides.bats.or(file.bats).unwrap_or(defaults.bat_count());
        let mut config = GameConfig::new(creatures, bats);
        if let Some(pits) = overrides.pits.or(file.pits) {
            config = config.with_pit_count(pits);
        }

        let seed = match (overrides.seed, file.seed) {
            (Some(seed), _) => SeedChoice::Flag(seed),
            (None, Some(seed)) => SeedChoice::SettingsFile(seed),
            (None, None) => SeedChoice::Generated(generated_seed),
        };
        Self { config, seed }
    }
}
