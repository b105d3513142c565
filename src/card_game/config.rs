use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card_game::{
    deck::CARDS_PER_TYPE,
    error::{Error, Result},
};

/// Default name of the exported results file.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "card_game_results.txt";

/// Initial value of the "cards to draw" input.
pub const DEFAULT_CARDS_PER_PLAYER: i64 = 5;

/// Session settings. Every field is optional in JSON and falls back to its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cards_per_type: usize,
    pub default_cards_per_player: i64,
    pub export_file_name: String,
    /// Fixed seed for reproducible shuffles; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cards_per_type: CARDS_PER_TYPE,
            default_cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Default config with a fixed RNG seed.
    pub fn seeded(seed: u64) -> Self {
        GameConfig {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cards_per_type == 0 {
            return Err(Error::InvalidConfig(
                "cards_per_type must be at least 1".into(),
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "export_file_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
