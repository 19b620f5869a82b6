//! SBB station clock with the schedule-delay mini-game.
//!
//! The second hand sweeps a full turn in 58.5 s and rests at twelve for
//! 1.5 s. The minute hand only moves during the rest, catching up to the
//! whole minutes elapsed since mount. Every 20 s an on-time train
//! may drift behind schedule; holding the sync control stops the clock and
//! burns one second of delay per second held.

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use chsim_core::constants::*;
use chsim_core::events::DashboardEvent;
use chsim_core::state::ClockView;
use chsim_core::types::{Cadence, WallClock};

/// Second hand angle for a position within the 60 s cycle.
pub fn second_hand_degrees(cycle_pos_ms: u64) -> f64 {
    let pos = cycle_pos_ms % SBB_CYCLE_MS;
    if pos < SBB_SWEEP_MS {
        pos as f64 / SBB_SWEEP_MS as f64 * 360.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct SbbEngine {
    start: WallClock,
    /// Clock time accumulated while not stopped.
    running_ms: u64,
    /// Whole minutes shown past `start`.
    minutes_advanced: u64,
    delay_secs: u32,
    holding: bool,
    hold: Cadence,
    drift: Cadence,
}

impl SbbEngine {
    pub fn new(start: WallClock) -> Self {
        Self {
            start,
            running_ms: 0,
            minutes_advanced: 0,
            delay_secs: 0,
            holding: false,
            hold: Cadence::new(SBB_HOLD_STEP_MS),
            drift: Cadence::new(SBB_DRIFT_CHECK_MS),
        }
    }

    pub fn press(&mut self) {
        self.holding = true;
    }

    pub fn release(&mut self) {
        self.holding = false;
        self.hold.reset();
    }

    pub fn delay_secs(&self) -> u32 {
        self.delay_secs
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// The clock freezes while a delay is being held down.
    pub fn time_stopped(&self) -> bool {
        self.holding && self.delay_secs > 0
    }

    /// On schedule.
    pub fn is_optimized(&self) -> bool {
        self.delay_secs == 0
    }

    pub fn train_lap_secs(&self) -> f64 {
        if self.delay_secs > 0 {
            TRAIN_LAP_DELAYED_SECS
        } else {
            TRAIN_LAP_NOMINAL_SECS
        }
    }

    /// Minutes past midnight currently shown by the hands.
    pub fn minute_of_day(&self) -> u64 {
        let start = u64::from(self.start.hour) * 60 + u64::from(self.start.minute);
        (start + self.minutes_advanced) % (24 * 60)
    }

    pub fn second_deg(&self) -> f64 {
        second_hand_degrees(self.running_ms)
    }

    pub fn minute_deg(&self) -> f64 {
        (self.minute_of_day() % 60) as f64 * 6.0
    }

    /// Advances 0.5° with every minute jump.
    pub fn hour_deg(&self) -> f64 {
        let minute_of_day = self.minute_of_day();
        let hour = (minute_of_day / 60) % 12;
        let minute = minute_of_day % 60;
        (hour as f64 * 30.0 + minute as f64 * 0.5) % 360.0
    }

    /// Advance by `dt_ms`, returning drift/recovery events.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Vec<DashboardEvent> {
        let mut events = Vec::new();

        // Hold countdown
        if self.time_stopped() {
            for _ in 0..self.hold.advance(dt_ms) {
                self.delay_secs -= 1;
                if self.delay_secs == 0 {
                    self.release();
                    info!("train schedule recovered");
                    events.push(DashboardEvent::ScheduleRecovered);
                    break;
                }
            }
        } else {
            self.hold.reset();
        }

        // Hands
        if !self.time_stopped() {
            self.running_ms += dt_ms;
            if self.running_ms % SBB_CYCLE_MS >= SBB_SWEEP_MS {
                self.minutes_advanced = self.running_ms / SBB_CYCLE_MS;
            }
        }

        // Drift
        if self.delay_secs == 0 && !self.time_stopped() {
            if self.drift.advance(dt_ms) > 0 {
                if let Some(&delay) = SBB_DRIFT_DELAYS.choose(rng) {
                    self.delay_secs = delay;
                    info!("train drifted +{delay}s behind schedule");
                    events.push(DashboardEvent::ScheduleDrift { delay_secs: delay });
                }
            }
        } else {
            self.drift.reset();
        }

        events
    }

    pub fn view(&self) -> ClockView {
        ClockView {
            second_deg: self.second_deg(),
            minute_deg: self.minute_deg(),
            hour_deg: self.hour_deg(),
            delay_secs: self.delay_secs,
            holding: self.holding,
            time_stopped: self.time_stopped(),
            optimized: self.is_optimized(),
            train_lap_secs: self.train_lap_secs(),
        }
    }
}
