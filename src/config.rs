//! Game configuration.
//!
//! Loads an optional JSON config file and validates the result. Both the
//! file and every field are optional; command-line flags may override the
//! loaded values before validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::state::{MAX_PLAYERS, MIN_PLAYERS};

/// Configuration for one game.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Number of seated players, 3 or 4.
    #[serde(default = "default_players")]
    pub players: usize,

    /// RNG seed for the deal, starting seat, and dice. Omit for a fresh
    /// game from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_players() -> usize {
    MIN_PLAYERS
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig { players: default_players(), seed: None }
    }
}

/// Errors loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {0}")]
    PlayerCount(usize),
}

impl GameConfig {
    /// Loads and validates a config from a JSON file.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants flags cannot express in the type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        Ok(())
    }
}
