//! Tick rate control for paced drivers.

use std::thread;
use std::time::{Duration, Instant};

use crate::schema::DEFAULT_TICK_RATE;

/// Lowest tick rate reachable through [`TickRate::decrease`].
pub const MIN_TICK_RATE: u32 = 10;
/// Increment applied by [`TickRate::increase`] and [`TickRate::decrease`].
pub const TICK_RATE_STEP: u32 = 10;

/// Generations per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate(u32);

impl Default for TickRate {
    fn default() -> Self {
        Self(DEFAULT_TICK_RATE)
    }
}

impl TickRate {
    /// Create a tick rate; zero is raised to 1.
    pub fn new(per_second: u32) -> Self {
        Self(per_second.max(1))
    }

    pub fn per_second(&self) -> u32 {
        self.0
    }

    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(TICK_RATE_STEP);
    }

    /// Lower the rate by one step, never below [`MIN_TICK_RATE`].
    ///
    /// A rate already at or below the floor is left unchanged.
    pub fn decrease(&mut self) {
        if self.0 > MIN_TICK_RATE {
            self.0 = self.0.saturating_sub(TICK_RATE_STEP).max(MIN_TICK_RATE);
        }
    }

    /// Time between two ticks.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.0 as f64)
    }
}

/// Sleeps between ticks to hold a [`TickRate`].
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    next: Instant,
}

impl Pacer {
    pub fn new(rate: TickRate) -> Self {
        Self {
            interval: rate.interval(),
            next: Instant::now(),
        }
    }

    /// Change the rate, taking effect from the next wait.
    pub fn set_rate(&mut self, rate: TickRate) {
        self.interval = rate.interval();
    }

    /// Block until the next tick is due.
    ///
    /// If the caller fell behind, the schedule restarts from now instead of
    /// bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.interval;
        } else {
            self.next = now + self.interval;
        }
    }
}
