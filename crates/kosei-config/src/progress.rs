//! Timings for the simulated progress indicator.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

const fn default_tick_interval_ms() -> u64 {
    400
}

const fn default_min_step() -> u8 {
    5
}

const fn default_max_step() -> u8 {
    15
}

const fn default_cap() -> u8 {
    90
}

const fn default_reset_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressConfig {
    /// Milliseconds between simulated progress steps.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Smallest random step added per tick.
    #[serde(default = "default_min_step")]
    pub min_step: u8,

    /// Largest random step added per tick.
    #[serde(default = "default_max_step")]
    pub max_step: u8,

    /// Simulated progress never passes this value while the request is pending.
    #[serde(default = "default_cap")]
    pub cap: u8,

    /// Delay after completion before progress drops back to 0.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            min_step: default_min_step(),
            max_step: default_max_step(),
            cap: default_cap(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

impl ProgressConfig {
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub const fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero tick interval, a zero
    /// or inverted step range, or a cap above 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "progress.tick_interval_ms",
                "must be greater than 0",
            ));
        }
        if self.min_step == 0 {
            return Err(ConfigError::invalid(
                "progress.min_step",
                "must be greater than 0",
            ));
        }
        if self.min_step > self.max_step {
            return Err(ConfigError::invalid(
                "progress.min_step",
                format!(
                    "min_step ({}) exceeds max_step ({})",
                    self.min_step, self.max_step
                ),
            ));
        }
        if self.cap > 100 {
            return Err(ConfigError::invalid(
                "progress.cap",
                format!("{} is above 100", self.cap),
            ));
        }
        Ok(())
    }
}
