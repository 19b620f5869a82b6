use crate::commands::DashboardCommand;
use crate::components::Blip;
use crate::enums::*;
use crate::events::DashboardEvent;
use crate::state::DashboardSnapshot;
use crate::types::{BlipId, Cadence, SimTime, WallClock};

// ---- Timing ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance();
    }
    assert_eq!(time.tick, 60);
    assert_eq!(time.elapsed_ms, 960);
}

#[test]
fn test_cadence_fires_once_per_period_and_carries_remainder() {
    let mut cadence = Cadence::new(1_000);
    let mut fired = 0;
    // 62 ticks of 16 ms = 992 ms: not yet.
    for _ in 0..62 {
        fired += cadence.advance(16);
    }
    assert_eq!(fired, 0);
    fired += cadence.advance(16);
    assert_eq!(fired, 1);
    assert_eq!(cadence.accumulated_ms, 8);
}

#[test]
fn test_cadence_large_step_fires_multiple_times() {
    let mut cadence = Cadence::new(20);
    assert_eq!(cadence.advance(65), 3);
    assert_eq!(cadence.accumulated_ms, 5);
    cadence.reset();
    assert_eq!(cadence.accumulated_ms, 0);
}

#[test]
fn test_cadence_zero_period_is_clamped() {
    let mut cadence = Cadence::new(0);
    assert_eq!(cadence.period_ms, 1);
    assert_eq!(cadence.advance(3), 3);
}

#[test]
fn test_wall_clock_wraps_at_midnight() {
    let clock = WallClock::new(23, 59, 30);
    let later = clock.advanced_by(45_000);
    assert_eq!(later, WallClock::new(0, 0, 15));
    assert_eq!(later.hhmm(), "00:00");
    assert_eq!(WallClock::new(9, 5, 0).hhmm(), "09:05");
}

// ---- Blip geometry ----

#[test]
fn test_blip_display_position() {
    let east = Blip {
        id: BlipId(1),
        angle_deg: 0.0,
        distance: 100.0,
        speed: 0.1,
    };
    let pos = east.display_position();
    assert!((pos.x - 100.0).abs() < 1e-9);
    assert!((pos.y - 50.0).abs() < 1e-9);

    let south_half = Blip {
        angle_deg: 90.0,
        distance: 50.0,
        ..east
    };
    let pos = south_half.display_position();
    assert!((pos.x - 50.0).abs() < 1e-9);
    assert!((pos.y - 75.0).abs() < 1e-9);
}

#[test]
fn test_blip_facing_and_proximity() {
    let mut blip = Blip {
        id: BlipId(7),
        angle_deg: 180.0,
        distance: 29.9,
        speed: 0.1,
    };
    assert!(blip.faces_left());
    assert!(blip.is_proximate());

    blip.angle_deg = 90.0;
    blip.distance = 30.0;
    assert!(!blip.faces_left());
    assert!(!blip.is_proximate());
}

// ---- Enums ----

#[test]
fn test_fidelity_band_boundaries() {
    assert_eq!(FidelityBand::from_density(0), FidelityBand::Skeletal);
    assert_eq!(FidelityBand::from_density(30), FidelityBand::Skeletal);
    assert_eq!(FidelityBand::from_density(31), FidelityBand::Medium);
    assert_eq!(FidelityBand::from_density(70), FidelityBand::Medium);
    assert_eq!(FidelityBand::from_density(71), FidelityBand::HiFidelity);
    assert_eq!(FidelityBand::from_density(100).label(), "HI_FIDELITY");
}

#[test]
fn test_advisory_alert_kinds() {
    assert!(AdvisoryKind::Urgent.is_alert());
    assert!(AdvisoryKind::Security.is_alert());
    assert!(!AdvisoryKind::Status.is_alert());
    assert!(!AdvisoryKind::Remark.is_alert());
    assert!(!AdvisoryKind::Instruction.is_alert());
}

// ---- Serialization ----

#[test]
fn test_command_is_internally_tagged() {
    let json = serde_json::to_string(&DashboardCommand::NeutralizeBlip {
        blip_id: BlipId(4),
    })
    .unwrap();
    assert_eq!(json, r#"{"type":"NeutralizeBlip","blip_id":4}"#);

    let back: DashboardCommand = serde_json::from_str(r#"{"type":"PressSync"}"#).unwrap();
    assert_eq!(back, DashboardCommand::PressSync);
}

#[test]
fn test_event_is_internally_tagged() {
    let event = DashboardEvent::Penalty {
        reason: PenaltyReason::EnergyOverconsumption,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "Penalty");
    assert_eq!(value["reason"], "EnergyOverconsumption");
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = DashboardSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: DashboardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, DashboardPhase::Running);
    assert!(back.radar.blips.is_empty());
    assert!(back.logs.is_empty());
}
