//! Configuration for a dice session.

use std::time::Duration;

use nw_core::{HISTORY_LIMIT, SETTINGS_KEY};

/// Delay between a roll request and its results.
pub const DEFAULT_ROLL_DELAY: Duration = Duration::from_millis(500);

/// Configuration for a dice session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How long a roll stays pending before results are drawn.
    pub roll_delay: Duration,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
    /// Storage key for the settings blob.
    pub settings_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roll_delay: DEFAULT_ROLL_DELAY,
            history_limit: HISTORY_LIMIT,
            settings_key: SETTINGS_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the roll delay.
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    /// Set the history limit (at least 1).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Set the settings storage key.
    pub fn with_settings_key(mut self, key: impl Into<String>) -> Self {
        self.settings_key = key.into();
        self
    }
}
