//! Session configuration.

use serde::{Deserialize, Serialize};

/// Levels in a campaign unless configured otherwise.
pub const DEFAULT_MAX_LEVEL: u32 = 10;

/// How a `GameSession` is set up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Last level of the campaign; advancing past it completes the campaign.
    pub max_level: u32,

    /// RNG seed. `None` seeds from the operating system.
    /// Same seed produces the same sequence of puzzles.
    pub seed: Option<u64>,

    /// Use random five-digit card ids instead of a counter.
    pub random_ids: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
            random_ids: false,
        }
    }
}

impl SessionConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the last level of the campaign.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Seed the session RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Switch to random five-digit card ids.
    #[must_use]
    pub fn with_random_ids(mut self) -> Self {
        self.random_ids = true;
        self
    }
}
