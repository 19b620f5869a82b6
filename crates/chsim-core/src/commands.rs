//! Operator commands sent from the embedding layer to the dashboard.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::BlipId;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DashboardCommand {
    // --- Swan radar ---
    /// Click on a blip. A blip that is already gone is ignored.
    NeutralizeBlip { blip_id: BlipId },

    // --- Mesh refiner ---
    /// Move the density slider (clamped to 0..=100).
    SetMeshDensity { density: u8 },

    // --- SBB engine ---
    /// Press and hold the sync control.
    PressSync,
    /// Release the sync control (pointer up or leave).
    ReleaseSync,

    // --- Dashboard control ---
    Pause,
    Resume,
    /// Unmount the dashboard: stop every timer for good.
    TearDown,
}
