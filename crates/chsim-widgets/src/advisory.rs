//! CH-COW-01 resource advisory.
//!
//! A priority-ordered message selector over the dashboard conditions, plus
//! idle small talk once everything has been calibrated for a while.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use chsim_core::constants::*;
use chsim_core::enums::AdvisoryKind;
use chsim_core::state::AdvisoryView;
use chsim_core::types::Cadence;

use crate::typewriter::Typewriter;

pub const INITIAL_INSTRUCTION: &str = "// ADVISORY: Adjust mesh density to match the solar cycle. High-fidelity rendering is restricted to daylight hours for energy optimization.";
pub const URGENT_MESSAGE: &str =
    "// URGENT: Night mode active. Decrease mesh density to save Swiss energy!";
pub const SECURITY_MESSAGE: &str =
    "// SECURITY: Swan signatures detected in the inner circle! Neutralize now!";
pub const STATUS_MESSAGE: &str =
    "// STATUS: Calibration successful. You're as precise as a Swiss watchmaker.";

pub const SWISS_REMARKS: [&str; 6] = [
    "// M4_LOG: Thermal levels stable. Cooler than the water in Lake Zurich.",
    "// ADVICE: Remember, a true Swiss engineer never settles for low-poly during the day.",
    "// M4_LOG: Precision is not an option, it's a demographic requirement.",
    "// ADVICE: Chocolate consumption levels are low. Calibration might be affected.",
    "// M4_LOG: Atmospheric pressure is slightly higher than a fondue pot.",
    "// ADVICE: Keep the SBB clock ticking. Time is our only currency.",
];

/// Inputs the advisory watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub is_day: bool,
    pub mesh_density: u8,
    pub radar_breach: bool,
    pub sbb_optimized: bool,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            is_day: true,
            mesh_density: 100,
            radar_breach: false,
            sbb_optimized: true,
        }
    }
}

impl Conditions {
    /// Mesh matched to the solar cycle, trains on time, no breach.
    pub fn is_optimized(&self) -> bool {
        let mesh_ok = if self.is_day {
            self.mesh_density >= ADVISORY_DAY_DENSITY
        } else {
            self.mesh_density <= ADVISORY_NIGHT_DENSITY
        };
        mesh_ok && self.sbb_optimized && !self.radar_breach
    }
}

/// Highest-priority message warranted by a change from `prev` to `current`.
pub fn select_message(prev: &Conditions, current: &Conditions) -> Option<AdvisoryKind> {
    if !current.is_day && current.mesh_density > ADVISORY_URGENT_NIGHT_DENSITY {
        Some(AdvisoryKind::Urgent)
    } else if current.radar_breach {
        Some(AdvisoryKind::Security)
    } else if current.is_optimized() && !prev.is_optimized() {
        Some(AdvisoryKind::Status)
    } else {
        None
    }
}

/// Fixed text for every kind except remarks, which are drawn at random.
pub fn message_text(kind: AdvisoryKind) -> Option<&'static str> {
    match kind {
        AdvisoryKind::Instruction => Some(INITIAL_INSTRUCTION),
        AdvisoryKind::Urgent => Some(URGENT_MESSAGE),
        AdvisoryKind::Security => Some(SECURITY_MESSAGE),
        AdvisoryKind::Status => Some(STATUS_MESSAGE),
        AdvisoryKind::Remark => None,
    }
}

#[derive(Debug, Clone)]
pub struct CowAdvisory {
    conditions: Conditions,
    kind: AdvisoryKind,
    quiet_ms: u64,
    idle_check: Cadence,
    typewriter: Typewriter,
}

impl CowAdvisory {
    pub fn new(conditions: Conditions) -> Self {
        Self {
            conditions,
            kind: AdvisoryKind::Instruction,
            quiet_ms: 0,
            idle_check: Cadence::new(ADVISORY_IDLE_CHECK_MS),
            typewriter: Typewriter::new(INITIAL_INSTRUCTION, ADVISORY_TYPE_MS),
        }
    }

    pub fn kind(&self) -> AdvisoryKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.typewriter.text()
    }

    /// Feed the latest conditions. Returns the new kind when the message changed.
    pub fn update_conditions(&mut self, current: Conditions) -> Option<AdvisoryKind> {
        if current == self.conditions {
            return None;
        }
        let prev = std::mem::replace(&mut self.conditions, current);
        let kind = select_message(&prev, &current)?;
        let text = message_text(kind)?;
        self.show(kind, text).then_some(kind)
    }

    /// Advance timers. Returns `Some(Remark)` when idle small talk started.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> Option<AdvisoryKind> {
        self.quiet_ms += dt_ms;
        self.typewriter.advance(dt_ms);

        let mut changed = None;
        for _ in 0..self.idle_check.advance(dt_ms) {
            if self.quiet_ms > ADVISORY_IDLE_MS && self.conditions.is_optimized() {
                if let Some(remark) = SWISS_REMARKS.choose(rng) {
                    if self.show(AdvisoryKind::Remark, remark) {
                        changed = Some(AdvisoryKind::Remark);
                    }
                    self.quiet_ms = 0;
                }
            }
        }
        changed
    }

    /// Switch to `text` unless it is already showing.
    fn show(&mut self, kind: AdvisoryKind, text: &str) -> bool {
        if self.typewriter.text() == text {
            return false;
        }
        debug!("advisory -> {kind:?}");
        self.kind = kind;
        self.quiet_ms = 0;
        self.typewriter.restart(text);
        true
    }

    pub fn view(&self) -> AdvisoryView {
        AdvisoryView {
            kind: self.kind,
            message: self.typewriter.text().to_string(),
            displayed: self.typewriter.visible().to_string(),
            typing: self.typewriter.is_typing(),
            alert: self.kind.is_alert(),
        }
    }
}
