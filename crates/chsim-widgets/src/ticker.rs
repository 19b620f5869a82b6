//! CH-COW-01 bovine interface: a rotating kernel status line.

use rand::seq::SliceRandom;
use rand::Rng;

use chsim_core::constants::*;
use chsim_core::state::TickerView;
use chsim_core::types::Cadence;

use crate::typewriter::Typewriter;

pub const COW_ASCII: &str = r"  ^__^
  (oo)\_______
  (__)\       )\/\
      ||----w |
      ||     ||";

pub const STATUS_MESSAGES: [&str; 15] = [
    "KERNEL LOAD: 99.7% — All sectors nominal.",
    "SUBJECT COUNT: 8,720,421 — Deviation within tolerance.",
    "WEATHER SYNC: Initializing precipitation override for Berne.",
    "CULTURAL MATRIX: Fondue module v4.2 — STABLE.",
    "EXPORT SURPLUS: CHF 49.2B — Timeline consistent.",
    "BORDER RENDER: Mountain pass textures reloading...",
    "DEMOCRACY SCRIPT: Running. 99.1% acceptance rate.",
    "TRAIN DELAY: Anomaly detected. Dispatching patch 0.003ms.",
    "BANKING MODULE: Offshore encryption layer — ONLINE.",
    "CLOCK SYNC: ±0.001ms. Subjects remain unaware.",
    "ALPS RENDERING: LOD level 4 active. No subjects near debug zone.",
    "POPULATION MOOD: NEUTRAL. Chocolate distribution nominal.",
    "LANGUAGE MATRIX: 4 protocols active. Divergence: 0%.",
    "NEUTRALITY CORE: Stable. All military override — DORMANT.",
    "SIMULATION INTEGRITY: 99.9998% — Variance acceptable.",
];

#[derive(Debug, Clone)]
pub struct CowTicker {
    typewriter: Typewriter,
    rotate: Cadence,
    blink: Cadence,
    cursor_visible: bool,
}

impl Default for CowTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CowTicker {
    pub fn new() -> Self {
        Self {
            typewriter: Typewriter::new(STATUS_MESSAGES[0], TICKER_TYPE_MS),
            rotate: Cadence::new(TICKER_ROTATE_MS),
            blink: Cadence::new(TICKER_CURSOR_BLINK_MS),
            cursor_visible: true,
        }
    }

    pub fn message(&self) -> &str {
        self.typewriter.text()
    }

    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) {
        if self.blink.advance(dt_ms) % 2 == 1 {
            self.cursor_visible = !self.cursor_visible;
        }
        if self.rotate.advance(dt_ms) > 0 {
            if let Some(next) = STATUS_MESSAGES.choose(rng) {
                self.typewriter.restart(*next);
                return;
            }
        }
        self.typewriter.advance(dt_ms);
    }

    pub fn view(&self) -> TickerView {
        TickerView {
            cow: COW_ASCII.to_string(),
            message: self.typewriter.text().to_string(),
            displayed: self.typewriter.visible().to_string(),
            typing: self.typewriter.is_typing(),
            cursor_visible: self.cursor_visible,
        }
    }
}
