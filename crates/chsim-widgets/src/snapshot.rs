//! Snapshot builder. Collects every widget's view for the renderer.

use chsim_core::enums::DashboardPhase;
use chsim_core::events::DashboardEvent;
use chsim_core::state::{BlipView, DashboardSnapshot, RadarView};
use chsim_core::types::SimTime;

use crate::advisory::CowAdvisory;
use crate::anomaly_log::AnomalyLog;
use crate::mesh::MeshRefiner;
use crate::radar::SwanRadar;
use crate::sbb_clock::SbbEngine;
use crate::ticker::CowTicker;

/// Borrowed widget state for one snapshot.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: DashboardPhase,
    pub radar: &'a SwanRadar,
    pub breach_active: bool,
    pub clock: &'a SbbEngine,
    pub mesh: &'a MeshRefiner,
    pub advisory: &'a CowAdvisory,
    pub ticker: &'a CowTicker,
    pub log: &'a AnomalyLog,
    pub shaking: bool,
}

pub fn build_snapshot(inputs: SnapshotInputs<'_>, events: Vec<DashboardEvent>) -> DashboardSnapshot {
    let blips = inputs
        .radar
        .blips()
        .iter()
        .map(|blip| {
            let pos = blip.display_position();
            BlipView {
                id: blip.id,
                angle_deg: blip.angle_deg,
                distance: blip.distance,
                x: pos.x,
                y: pos.y,
                faces_left: blip.faces_left(),
                proximate: blip.is_proximate(),
            }
        })
        .collect();

    DashboardSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        radar: RadarView {
            blips,
            breach_active: inputs.breach_active,
        },
        clock: inputs.clock.view(),
        mesh: inputs.mesh.view(),
        advisory: inputs.advisory.view(),
        ticker: inputs.ticker.view(),
        logs: inputs.log.entries().to_vec(),
        alert_count: inputs.log.alert_count(),
        shaking: inputs.shaking,
        events,
    }
}
