//! Mesh refiner: pixelation slider bound to a day/night cycle.

use log::{debug, warn};

use chsim_core::constants::*;
use chsim_core::enums::{FidelityBand, PenaltyReason};
use chsim_core::events::DashboardEvent;
use chsim_core::state::MeshView;
use chsim_core::types::Cadence;

/// Pixel block size for a density: 100 is crisp (1), 0 is coarse (20).
pub fn pixel_scale(density: u8) -> u32 {
    let density = f64::from(density.min(100));
    let scale = (MAX_PIXEL_SCALE as f64 - density / 100.0 * (MAX_PIXEL_SCALE - 1) as f64).round();
    (scale as u32).max(1)
}

/// Penalty warranted by this combination, if any.
pub fn penalty_for(is_day: bool, density: u8) -> Option<PenaltyReason> {
    if is_day && density < DAY_MIN_DENSITY {
        Some(PenaltyReason::LowFidelityDayRestriction)
    } else if !is_day && density > NIGHT_MAX_DENSITY {
        Some(PenaltyReason::EnergyOverconsumption)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct MeshRefiner {
    density: u8,
    is_day: bool,
    cycle: Cadence,
    penalty_check: Cadence,
    elapsed_ms: u64,
    last_penalty_ms: Option<u64>,
}

impl MeshRefiner {
    pub fn new(density: u8) -> Self {
        Self {
            density: density.min(100),
            is_day: true,
            cycle: Cadence::new(DAY_NIGHT_PERIOD_MS),
            penalty_check: Cadence::new(PENALTY_CHECK_MS),
            elapsed_ms: 0,
            last_penalty_ms: None,
        }
    }

    pub fn density(&self) -> u8 {
        self.density
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    /// Move the slider. A change restarts the penalty check interval.
    pub fn set_density(&mut self, density: u8) {
        let density = density.min(100);
        if density != self.density {
            self.density = density;
            self.penalty_check.reset();
            debug!(
                "mesh density {density} ({})",
                FidelityBand::from_density(density).label()
            );
        }
    }

    /// Whole seconds until the next day/night flip.
    pub fn countdown_secs(&self) -> u32 {
        DAY_NIGHT_COUNTDOWN_SECS - (self.cycle.accumulated_ms / 1_000) as u32
    }

    pub fn penalty(&self) -> Option<PenaltyReason> {
        penalty_for(self.is_day, self.density)
    }

    pub fn advance(&mut self, dt_ms: u64) -> Vec<DashboardEvent> {
        let mut events = Vec::new();
        self.elapsed_ms += dt_ms;

        if self.cycle.advance(dt_ms) % 2 == 1 {
            self.is_day = !self.is_day;
            self.penalty_check.reset();
            events.push(DashboardEvent::DayNightToggled {
                is_day: self.is_day,
            });
        }

        for _ in 0..self.penalty_check.advance(dt_ms) {
            let cooling = self
                .last_penalty_ms
                .is_some_and(|last| self.elapsed_ms - last < PENALTY_COOLDOWN_MS);
            if cooling {
                continue;
            }
            if let Some(reason) = self.penalty() {
                warn!("mesh penalty: {}", reason.code());
                self.last_penalty_ms = Some(self.elapsed_ms);
                events.push(DashboardEvent::Penalty { reason });
            }
        }

        events
    }

    pub fn view(&self) -> MeshView {
        MeshView {
            density: self.density,
            is_day: self.is_day,
            cycle_countdown_secs: self.countdown_secs(),
            pixel_scale: pixel_scale(self.density),
            fidelity: FidelityBand::from_density(self.density),
            penalty: self.penalty().is_some(),
        }
    }
}
