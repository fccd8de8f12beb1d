//! Simulated progress while a review request is pending.
//!
//! The ticker does not know how far the request has actually come. It walks
//! a 0-100 counter up by random steps and stops at a cap below 100 so the
//! final jump to 100 is left to the real completion.

use std::sync::Arc;
use std::time::Duration;

use kosei_config::ProgressConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Timing and step parameters for the progress simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSettings {
    pub tick_interval: Duration,
    pub min_step: u8,
    pub max_step: u8,
    pub cap: u8,
    pub reset_delay: Duration,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self::from(&ProgressConfig::default())
    }
}

impl From<&ProgressConfig> for ProgressSettings {
    fn from(config: &ProgressConfig) -> Self {
        Self {
            tick_interval: config.tick_interval(),
            min_step: config.min_step,
            max_step: config.max_step,
            cap: config.cap,
            reset_delay: config.reset_delay(),
        }
    }
}

impl ProgressSettings {
    /// Draw a step in `min_step..=max_step`. Falls back to `min_step` when
    /// the OS random source is unavailable.
    #[must_use]
    pub fn random_step(&self) -> u8 {
        let span = u32::from(self.max_step.saturating_sub(self.min_step)) + 1;
        let mut bytes = [0u8; 4];
        match getrandom::fill(&mut bytes) {
            Ok(()) => {
                let offset = u32::from_le_bytes(bytes) % span;
                self.min_step
                    .saturating_add(u8::try_from(offset).unwrap_or(0))
            }
            Err(error) => {
                tracing::debug!(%error, "random source unavailable, using minimum step");
                self.min_step
            }
        }
    }
}

/// Add `step` to `current` without passing `cap`. Values already at or above
/// the cap are left alone.
#[must_use]
pub const fn advance(current: u8, step: u8, cap: u8) -> u8 {
    if current >= cap {
        return current;
    }
    let next = current.saturating_add(step);
    if next > cap { cap } else { next }
}

/// Owner of the single background task that drives simulated progress.
///
/// Starting always stops the previous task first, so at most one ticker is
/// alive per owner. Dropping the ticker stops it.
#[derive(Debug, Default)]
pub struct ProgressTicker {
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Start ticking `progress` every `settings.tick_interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, progress: Arc<watch::Sender<u8>>, settings: ProgressSettings) {
        if self.stop() {
            tracing::debug!("replaced running progress ticker");
        }

        let period = settings.tick_interval;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let step = settings.random_step();
                progress.send_if_modified(|value| {
                    let next = advance(*value, step, settings.cap);
                    let changed = next != *value;
                    *value = next;
                    changed
                });
            }
        }));
    }

    /// Stop the ticker. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some_and(|handle| {
            handle.abort();
            true
        })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
