//! Fundamental identifier and timing types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::TICK_MS;

/// Identifier of a single blip. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlipId(pub u64);

impl fmt::Display for BlipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blip#{}", self.0)
    }
}

/// Dashboard time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed dashboard time in milliseconds.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += TICK_MS;
    }
}

/// Time of day on the dashboard's wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallClock {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// The time of day `elapsed_ms` after this one, wrapping at midnight.
    pub fn advanced_by(&self, elapsed_ms: u64) -> Self {
        let start = u64::from(self.hour) * 3_600 + u64::from(self.minute) * 60 + u64::from(self.second);
        let secs = (start + elapsed_ms / 1_000) % 86_400;
        Self {
            hour: (secs / 3_600) as u32,
            minute: (secs / 60 % 60) as u32,
            second: (secs % 60) as u32,
        }
    }

    /// `HH:MM`, as shown in the anomaly log.
    pub fn hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// A periodic timer driven by the tick step instead of the wall clock.
///
/// Fires once per elapsed period; the remainder carries into the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    pub period_ms: u64,
    pub accumulated_ms: u64,
}

impl Cadence {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
        }
    }

    /// Advance by `dt_ms` and return how many times the timer fired.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms;
        let fired = self.accumulated_ms / self.period_ms;
        self.accumulated_ms %= self.period_ms;
        fired as u32
    }

    /// Restart the period from zero.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
