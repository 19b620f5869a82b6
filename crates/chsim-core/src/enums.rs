//! Enumeration types used throughout the dashboard.

use serde::{Deserialize, Serialize};

/// Lifecycle of the dashboard as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardPhase {
    #[default]
    Running,
    /// Commands are processed, time does not advance.
    Paused,
    /// All timers stopped. Terminal.
    TornDown,
}

/// Severity of an anomaly log entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
}

/// Mesh fidelity label shown on the refiner badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FidelityBand {
    Skeletal,
    Medium,
    #[default]
    HiFidelity,
}

impl FidelityBand {
    pub fn from_density(density: u8) -> Self {
        match density {
            0..=30 => Self::Skeletal,
            31..=70 => Self::Medium,
            _ => Self::HiFidelity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Skeletal => "SKELETAL",
            Self::Medium => "MEDIUM",
            Self::HiFidelity => "HI_FIDELITY",
        }
    }
}

/// Why the mesh refiner issued a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyReason {
    /// Daytime with too little mesh density.
    LowFidelityDayRestriction,
    /// Nighttime with too much mesh density.
    EnergyOverconsumption,
}

impl PenaltyReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::LowFidelityDayRestriction => "LOW_FIDELITY_DAY_RESTRICTION",
            Self::EnergyOverconsumption => "ENERGY_OVERCONSUMPTION",
        }
    }
}

/// Category of the message shown by the cow advisory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryKind {
    /// The boot-time calibration instruction.
    #[default]
    Instruction,
    /// Night mode with an oversized mesh.
    Urgent,
    /// Swans in the inner circle.
    Security,
    /// Calibration just succeeded.
    Status,
    /// Idle small talk.
    Remark,
}

impl AdvisoryKind {
    /// Alerts are rendered red under the ALERT_CORE header.
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Urgent | Self::Security)
    }
}
