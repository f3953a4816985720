use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`HudConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse HUD config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("damage steps must be at least 1, got {0}")]
    InvalidSteps(u32),
    #[error("starting level must be at least 1")]
    InvalidStartingLevel,
}

/// Number of hits a single heart absorbs before it is consumed.
///
/// A heart's partial damage ranges over `0..steps`. Zero steps would leave
/// no valid damage value, so it is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DamageSteps(u32);

impl DamageSteps {
    /// Four quarter-heart steps, the layout the heart art is drawn for.
    pub const QUARTERS: Self = Self(4);

    pub fn new(steps: u32) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::InvalidSteps(steps));
        }
        Ok(Self(steps))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Highest partial damage a living heart can hold (`steps - 1`).
    pub fn max_partial(self) -> u32 {
        self.0 - 1
    }
}

impl Default for DamageSteps {
    fn default() -> Self {
        Self::QUARTERS
    }
}

impl TryFrom<u32> for DamageSteps {
    type Error = ConfigError;

    fn try_from(steps: u32) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<DamageSteps> for u32 {
    fn from(steps: DamageSteps) -> u32 {
        steps.0
    }
}

/// Tunables for a vitals session. Loaded from JSON by the page, or built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Damage steps per heart (default: 4).
    pub steps: DamageSteps,
    /// Hearts granted by `init` (default: 3).
    pub starting_lives: u32,
    /// Level set by `init` (default: 1).
    pub starting_level: u32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            steps: DamageSteps::QUARTERS,
            starting_lives: 3,
            starting_level: 1,
        }
    }
}

impl HudConfig {
    pub fn with_steps(mut self, steps: DamageSteps) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    pub fn with_starting_level(mut self, level: u32) -> Self {
        self.starting_level = level;
        self
    }

    /// Parse and validate a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_level == 0 {
            return Err(ConfigError::InvalidStartingLevel);
        }
        Ok(())
    }
}
