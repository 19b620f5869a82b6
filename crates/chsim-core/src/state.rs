//! Dashboard snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{DashboardEvent, LogEntry};
use crate::types::{BlipId, SimTime};

/// Complete dashboard state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub time: SimTime,
    pub phase: DashboardPhase,
    pub radar: RadarView,
    pub clock: ClockView,
    pub mesh: MeshView,
    pub advisory: AdvisoryView,
    pub ticker: TickerView,
    /// Security feed, newest first.
    pub logs: Vec<LogEntry>,
    /// Number of warn entries in `logs`.
    pub alert_count: u32,
    /// The kernel card is shaking.
    pub shaking: bool,
    /// Events emitted during this tick.
    pub events: Vec<DashboardEvent>,
}

/// A blip as drawn on the scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlipView {
    pub id: BlipId,
    pub angle_deg: f64,
    pub distance: f64,
    /// Percent of scope width, center at 50.
    pub x: f64,
    pub y: f64,
    pub faces_left: bool,
    pub proximate: bool,
}

/// Swan radar state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadarView {
    pub blips: Vec<BlipView>,
    /// A breach happened within the last second.
    pub breach_active: bool,
}

/// SBB clock and delay mini-game state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockView {
    pub second_deg: f64,
    pub minute_deg: f64,
    pub hour_deg: f64,
    /// 0 = on schedule.
    pub delay_secs: u32,
    pub holding: bool,
    pub time_stopped: bool,
    pub optimized: bool,
    pub train_lap_secs: f64,
}

/// Mesh refiner state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshView {
    pub density: u8,
    pub is_day: bool,
    /// Seconds until the solar cycle flips.
    pub cycle_countdown_secs: u32,
    pub pixel_scale: u32,
    pub fidelity: FidelityBand,
    pub penalty: bool,
}

/// Cow advisory panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisoryView {
    pub kind: AdvisoryKind,
    pub message: String,
    /// Typewriter-revealed prefix of `message`.
    pub displayed: String,
    pub typing: bool,
    pub alert: bool,
}

/// CH-COW-01 bovine interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerView {
    pub cow: String,
    pub message: String,
    pub displayed: String,
    pub typing: bool,
    pub cursor_visible: bool,
}
