//! Events emitted by the dashboard for the embedding layer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::BlipId;

/// Transient notifications, one list per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardEvent {
    /// A blip reached the center and was respawned at the edge.
    Breach { blip_id: BlipId, angle_deg: f64 },
    /// The operator removed a blip before it breached.
    Neutralized { blip_id: BlipId, replacement: BlipId },
    /// The train fell behind schedule.
    ScheduleDrift { delay_secs: u32 },
    /// Holding the sync control brought the delay back to zero.
    ScheduleRecovered,
    /// The mesh refiner penalized the current density.
    Penalty { reason: PenaltyReason },
    /// The solar cycle flipped.
    DayNightToggled { is_day: bool },
    /// The cow advisory switched to a new message.
    AdvisoryChanged { kind: AdvisoryKind },
}

/// One line of the security feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub message: String,
    /// `HH:MM` on the dashboard wall clock.
    pub time: String,
    pub level: LogLevel,
}
