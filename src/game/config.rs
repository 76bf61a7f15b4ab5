use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest `half_extent` whose three projections still fit a terminal
pub const MAX_HALF_EXTENT: i32 = 32;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playable coordinates on every axis lie in `-half_extent..=half_extent`
    pub half_extent: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Maximum number of coins on the field at once
    pub max_coins: usize,
    /// The snake advances once every this many ticks
    pub move_interval: u64,
    /// A coin spawn is attempted once every this many ticks
    pub spawn_interval: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            half_extent: 6,
            initial_snake_length: 3,
            max_coins: 5,
            move_interval: 24,
            spawn_interval: 128,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom volume size
    pub fn new(half_extent: i32) -> Self {
        Self {
            half_extent,
            ..Default::default()
        }
    }

    /// Cells along one edge of the play volume
    pub fn side(&self) -> i32 {
        self.half_extent.saturating_mul(2).saturating_add(1)
    }

    /// Total number of cells in the play volume
    pub fn volume(&self) -> usize {
        let side = self.side().max(0) as usize;
        side.saturating_mul(side).saturating_mul(side)
    }

    /// Check that a session can be built from this configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_HALF_EXTENT).contains(&self.half_extent),
            "half_extent must be between 1 and {MAX_HALF_EXTENT}, got {}",
            self.half_extent
        );
        ensure!(self.move_interval > 0, "move_interval must be positive");
        ensure!(self.spawn_interval > 0, "spawn_interval must be positive");
        ensure!(
            self.initial_snake_length >= 3,
            "initial_snake_length must be at least 3, got {}",
            self.initial_snake_length
        );
        ensure!(
            self.initial_snake_length as i32 - 1 <= self.half_extent,
            "a snake of length {} does not fit in a volume with half_extent {}",
            self.initial_snake_length,
            self.half_extent
        );
        ensure!(
            self.initial_snake_length + self.max_coins < self.volume(),
            "max_coins {} leaves no free cells in a volume of {}",
            self.max_coins,
            self.volume()
        );
        Ok(())
    }

    /// Parse a YAML document; missing keys fall back to defaults
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(text).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }
}
