//! Driving a dashboard for a fixed number of ticks.

use std::sync::{Arc, Mutex};

use log::info;

use chsim_core::events::DashboardEvent;
use chsim_core::state::DashboardSnapshot;
use chsim_widgets::{DashboardConfig, DashboardEngine};

use crate::autopilot::autopilot_commands;
use crate::error::AppError;
use crate::game_loop::{self, TICK_DURATION};
use crate::ipc;
use crate::state::AppState;

/// Running count of notable events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTally {
    pub breaches: u32,
    pub neutralized: u32,
    pub penalties: u32,
    pub drifts: u32,
}

impl EventTally {
    pub fn record(&mut self, events: &[DashboardEvent]) {
        for event in events {
            match event {
                DashboardEvent::Breach { .. } => self.breaches += 1,
                DashboardEvent::Neutralized { .. } => self.neutralized += 1,
                DashboardEvent::Penalty { .. } => self.penalties += 1,
                DashboardEvent::ScheduleDrift { .. } => self.drifts += 1,
                _ => {}
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub tally: EventTally,
    pub last: DashboardSnapshot,
}

/// Run `ticks` ticks on the calling thread as fast as possible.
pub fn run_headless(config: DashboardConfig, ticks: u64, autopilot: bool) -> RunSummary {
    let mut engine = DashboardEngine::new(config);
    let mut tally = EventTally::default();
    let mut last = engine.snapshot();

    for _ in 0..ticks {
        if autopilot {
            engine.queue_commands(autopilot_commands(&last));
        }
        last = engine.tick();
        game_loop::report_events(last.time.tick, &last.events);
        tally.record(&last.events);
    }

    info!("headless run finished at tick {}", last.time.tick);
    RunSummary { tally, last }
}

/// Run on the loop thread in wall time until `ticks` ticks have elapsed.
pub fn run_realtime(
    state: &AppState,
    config: DashboardConfig,
    ticks: u64,
    autopilot: bool,
) -> Result<RunSummary, AppError> {
    let tally = Arc::new(Mutex::new(EventTally::default()));
    let sink_tally = Arc::clone(&tally);
    let sink = move |snapshot: &DashboardSnapshot| {
        game_loop::report_events(snapshot.time.tick, &snapshot.events);
        if let Ok(mut tally) = sink_tally.lock() {
            tally.record(&snapshot.events);
        }
    };
    ipc::start_dashboard(state, config, sink)?;

    loop {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = ipc::get_snapshot(state)? else {
            continue;
        };
        if snapshot.time.tick >= ticks {
            break;
        }
        if autopilot {
            for command in autopilot_commands(&snapshot) {
                ipc::send_command(state, command)?;
            }
        }
    }

    ipc::stop_dashboard(state)?;

    let last = ipc::get_snapshot(state)?.unwrap_or_default();
    let tally = *tally.lock().map_err(|_| AppError::LockPoisoned("tally"))?;
    Ok(RunSummary { tally, last })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chsim_core::enums::PenaltyReason;
    use chsim_core::types::BlipId;

    #[test]
    fn test_tally_counts_by_kind() {
        let mut tally = EventTally::default();
        tally.record(&[
            DashboardEvent::Breach {
                blip_id: BlipId(1),
                angle_deg: 10.0,
            },
            DashboardEvent::Penalty {
                reason: PenaltyReason::EnergyOverconsumption,
            },
            DashboardEvent::ScheduleRecovered,
            DashboardEvent::Breach {
                blip_id: BlipId(2),
                angle_deg: 20.0,
            },
        ]);
        assert_eq!(tally.breaches, 2);
        assert_eq!(tally.penalties, 1);
        assert_eq!(tally.neutralized, 0);
    }

    #[test]
    fn test_unattended_radar_breaches() {
        let summary = run_headless(DashboardConfig::default(), 3_000, false);
        assert!(summary.tally.breaches >= 3);
        assert_eq!(summary.tally.neutralized, 0);
        assert_eq!(summary.last.time.tick, 3_000);
    }

    #[test]
    fn test_autopilot_holds_the_perimeter() {
        let summary = run_headless(DashboardConfig::default(), 3_000, true);
        assert_eq!(summary.tally.breaches, 0);
        assert!(summary.tally.neutralized >= 3);
        assert!(!summary.last.radar.breach_active);
    }

    #[test]
    fn test_headless_is_deterministic() {
        let a = run_headless(DashboardConfig::default(), 500, true);
        let b = run_headless(DashboardConfig::default(), 500, true);
        assert_eq!(
            serde_json::to_string(&a.last).unwrap(),
            serde_json::to_string(&b.last).unwrap()
        );
        assert_eq!(a.tally, b.tally);
    }

    #[test]
    fn test_realtime_run_stops_at_target() {
        let state = AppState::new();
        let summary = run_realtime(&state, DashboardConfig::default(), 10, false).unwrap();
        assert!(summary.last.time.tick >= 10);
        assert!(!*state.running.lock().unwrap());
    }
}
