//! Publish throttling
//!
//! A reading is published when it moved far enough from the last
//! published value, or when the cooldown since the last publish has
//! elapsed. Anything else is dropped without touching the state.

use embassy_time::{Duration, Instant};

/// Forced refresh interval of an unchanged temperature
pub const TEMPERATURE_COOLDOWN: Duration = Duration::from_secs(15 * 60);

/// Temperature change that is published immediately, in degrees Celsius
pub const TEMPERATURE_CHANGE_THRESHOLD: f32 = 0.2;

/// Throttling parameters of one metric
#[derive(Debug, Clone, Copy)]
pub struct GateConfig {
    /// Time after a publish when the next one is forced
    pub cooldown: Duration,
    /// Absolute change that triggers a publish
    pub change_threshold: f32,
}

impl GateConfig {
    pub const fn temperature() -> Self {
        Self {
            cooldown: TEMPERATURE_COOLDOWN,
            change_threshold: TEMPERATURE_CHANGE_THRESHOLD,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::temperature()
    }
}

/// A value to send on a channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Publish<C> {
    pub channel: C,
    pub value: f32,
}

/// Publish state of one metric
#[derive(Debug, Clone)]
pub struct PublishState<C> {
    channel: C,
    last_value: f32,
    next_allowed: Instant,
    config: GateConfig,
}

impl<C: Copy> PublishState<C> {
    /// Create a fresh state; the first evaluated reading always publishes
    pub const fn new(channel: C, config: GateConfig) -> Self {
        Self {
            channel,
            last_value: 0.0,
            next_allowed: Instant::from_ticks(0),
            config,
        }
    }

    /// Decide whether `value` has to be published at `now`
    ///
    /// On publish the state records the value and restarts the cooldown.
    pub fn evaluate(&mut self, value: f32, now: Instant) -> Option<Publish<C>> {
        let changed = libm::fabsf(value - self.last_value) >= self.config.change_threshold;
        let expired = now >= self.next_allowed;
        if !changed && !expired {
            return None;
        }

        self.last_value = value;
        self.next_allowed = now + self.config.cooldown;

        Some(Publish {
            channel: self.channel,
            value,
        })
    }

    pub const fn channel(&self) -> C {
        self.channel
    }

    pub const fn last_value(&self) -> f32 {
        self.last_value
    }

    pub const fn next_allowed(&self) -> Instant {
        self.next_allowed
    }

    pub const fn config(&self) -> &GateConfig {
        &self.config
    }
}
