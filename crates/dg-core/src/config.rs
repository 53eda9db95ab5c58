//! Configuration for a game session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dice::Sampling;
use crate::error::{GameError, GameResult};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fewest dice a player may pick.
    pub min_dice: usize,
    /// Most dice a player may pick.
    pub max_dice: usize,
    /// Lowest face value on every die.
    pub face_lower: i32,
    /// Highest face value on every die.
    pub face_upper: i32,
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// How dice turn randomness into faces.
    pub sampling: Sampling,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_dice: 3,
            max_dice: 6,
            face_lower: 1,
            face_upper: 6,
            seed: 42,
            sampling: Sampling::Uniform,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the allowed number of dice.
    pub fn with_dice_range(mut self, min: usize, max: usize) -> Self {
        self.min_dice = min;
        self.max_dice = max;
        self
    }

    /// Set the face range shared by every die.
    pub fn with_faces(mut self, lower: i32, upper: i32) -> Self {
        self.face_lower = lower;
        self.face_upper = upper;
        self
    }

    /// Set the sampling mode.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Check that `count` lies within `min_dice..=max_dice`.
    pub fn check_dice_count(&self, count: usize) -> GameResult<()> {
        if (self.min_dice..=self.max_dice).contains(&count) {
            Ok(())
        } else {
            Err(GameError::DiceCountOutOfRange {
                count,
                min: self.min_dice,
                max: self.max_dice,
            })
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from JSON text. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> GameResult<Self> {
        serde_json::from_str(text).map_err(|e| GameError::Config(e.to_string()))
    }
}
