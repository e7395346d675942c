use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the lake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LakeConfig {
    /// Side length of the square grid
    pub size: usize,
    /// One hazard draw per this many cells (5 gives ~20% hazards)
    pub cells_per_hazard: usize,
    /// Seed for hazard placement and the random agent; entropy if unset
    pub seed: Option<u64>,

    // Rewards
    /// Reward for reaching the goal
    pub goal_reward: f32,
    /// Reward for falling into a hazard
    pub hazard_reward: f32,
    /// Reward for any other landing
    pub step_reward: f32,
}

impl Default for LakeConfig {
    fn default() -> Self {
        Self {
            size: 6,
            cells_per_hazard: 5,
            seed: None,
            goal_reward: 1.0,
            hazard_reward: -1.0,
            step_reward: 0.0,
        }
    }
}

impl LakeConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of random hazard draws made on reset
    pub fn hazard_draws(&self) -> usize {
        (self.size * self.size) / self.cells_per_hazard.max(1)
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// Start and goal must be distinct, so the grid needs at least two cells
    /// per side.
    pub fn validate(&self) -> Result<(), String> {
        if self.size < 2 {
            return Err(format!("size must be at least 2, got {}", self.size));
        }

        if self.cells_per_hazard == 0 {
            return Err("cells_per_hazard must be at least 1".to_string());
        }

        for (name, value) in [
            ("goal_reward", self.goal_reward),
            ("hazard_reward", self.hazard_reward),
            ("step_reward", self.step_reward),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }

        Ok(())
    }
}
