//! Dashboard loop thread. Ticks the engine at 60 Hz and publishes snapshots.
//!
//! The engine is built inside the thread. Commands arrive over `mpsc`;
//! snapshots go to a `SnapshotSink` and into shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{info, log, Level};

use chsim_core::commands::DashboardCommand;
use chsim_core::constants::TICK_MS;
use chsim_core::events::DashboardEvent;
use chsim_core::state::DashboardSnapshot;
use chsim_widgets::{DashboardConfig, DashboardEngine};

use crate::error::AppError;
use crate::state::LoopCommand;

/// Wall time of one tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MS);

/// Receiver of per-tick snapshots.
pub trait SnapshotSink: Send + 'static {
    fn emit(&mut self, snapshot: &DashboardSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(&DashboardSnapshot) + Send + 'static,
{
    fn emit(&mut self, snapshot: &DashboardSnapshot) {
        self(snapshot)
    }
}

/// Sink that writes each tick's events to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SnapshotSink for LogSink {
    fn emit(&mut self, snapshot: &DashboardSnapshot) {
        report_events(snapshot.time.tick, &snapshot.events);
    }
}

pub fn report_events(tick: u64, events: &[DashboardEvent]) {
    for event in events {
        log!(event_level(event), "[{tick}] {}", describe_event(event));
    }
}

fn event_level(event: &DashboardEvent) -> Level {
    match event {
        DashboardEvent::Breach { .. } | DashboardEvent::Penalty { .. } => Level::Warn,
        DashboardEvent::Neutralized { .. } | DashboardEvent::AdvisoryChanged { .. } => {
            Level::Debug
        }
        _ => Level::Info,
    }
}

/// One-line operator description of an event.
pub fn describe_event(event: &DashboardEvent) -> String {
    match event {
        DashboardEvent::Breach { blip_id, angle_deg } => {
            format!("perimeter breach by {blip_id} at {angle_deg:.1}°")
        }
        DashboardEvent::Penalty { reason } => format!("mesh penalty {}", reason.code()),
        DashboardEvent::ScheduleDrift { delay_secs } => {
            format!("SBB running +{delay_secs}s late")
        }
        DashboardEvent::ScheduleRecovered => "SBB schedule recovered".to_string(),
        DashboardEvent::DayNightToggled { is_day } => {
            if *is_day { "day cycle" } else { "night cycle" }.to_string()
        }
        DashboardEvent::Neutralized {
            blip_id,
            replacement,
        } => format!("{blip_id} neutralized, {replacement} inbound"),
        DashboardEvent::AdvisoryChanged { kind } => format!("advisory now {kind:?}"),
    }
}

/// Spawn the loop thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_dashboard_loop<S: SnapshotSink>(
    config: DashboardConfig,
    sink: S,
    latest_snapshot: Arc<Mutex<Option<DashboardSnapshot>>>,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("chsim-dashboard-loop".into())
        .spawn(move || {
            run_dashboard_loop(config, sink, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until `Shutdown` or until every sender is dropped.
fn run_dashboard_loop<S: SnapshotSink>(
    config: DashboardConfig,
    mut sink: S,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<DashboardSnapshot>>,
) {
    info!("dashboard mounted with seed {}", config.seed);
    let mut engine = DashboardEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Dashboard(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tear_down(&mut engine);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        let snapshot = engine.tick();
        sink.emit(&snapshot);

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; skip ahead instead of catching up.
            next_tick_time = now;
        }
    }
}

fn tear_down(engine: &mut DashboardEngine) {
    engine.queue_command(DashboardCommand::TearDown);
    let final_state = engine.tick();
    info!(
        "dashboard torn down after {} ticks ({} alerts)",
        final_state.time.tick, final_state.alert_count
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chsim_core::enums::DashboardPhase;

    fn channel_sink() -> (impl SnapshotSink, mpsc::Receiver<DashboardSnapshot>) {
        let (tx, rx) = mpsc::channel();
        let sink = move |snapshot: &DashboardSnapshot| {
            let _ = tx.send(snapshot.clone());
        };
        (sink, rx)
    }

    #[test]
    fn test_drift_reported_in_seconds() {
        let line = describe_event(&DashboardEvent::ScheduleDrift { delay_secs: 5 });
        assert_eq!(line, "SBB running +5s late");
        assert_eq!(
            event_level(&DashboardEvent::ScheduleDrift { delay_secs: 5 }),
            Level::Info
        );
    }

    #[test]
    fn test_breach_reported_as_warning() {
        let breach = DashboardEvent::Breach {
            blip_id: chsim_core::types::BlipId(7),
            angle_deg: 212.34,
        };
        assert_eq!(describe_event(&breach), "perimeter breach by blip#7 at 212.2°");
        assert_eq!(event_level(&breach), Level::Warn);
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION.as_millis(), 16);
    }

    #[test]
    fn test_loop_emits_and_stores_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let (sink, rx) = channel_sink();
        let (tx, handle) =
            spawn_dashboard_loop(DashboardConfig::default(), sink, Arc::clone(&latest)).unwrap();

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.time.tick, 1);
        assert_eq!(second.time.tick, 2);

        tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_commands_reach_engine() {
        let latest = Arc::new(Mutex::new(None));
        let (sink, rx) = channel_sink();
        let (tx, handle) =
            spawn_dashboard_loop(DashboardConfig::default(), sink, Arc::clone(&latest)).unwrap();

        tx.send(LoopCommand::Dashboard(DashboardCommand::Pause)).unwrap();
        let paused = rx
            .iter()
            .find(|s| s.phase == DashboardPhase::Paused)
            .unwrap();
        let frozen_at = paused.time.tick;
        let next = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(next.time.tick, frozen_at);

        tx.send(LoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_nothing_emitted_after_shutdown() {
        let latest = Arc::new(Mutex::new(None));
        let (sink, rx) = channel_sink();
        let (tx, handle) =
            spawn_dashboard_loop(DashboardConfig::default(), sink, Arc::clone(&latest)).unwrap();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();

        drop(tx);
        handle.join().unwrap();

        let stored = latest.lock().unwrap().clone().unwrap();
        let emitted: Vec<_> = rx.try_iter().collect();
        let last_emitted = emitted.last().map_or(stored.time.tick, |s| s.time.tick);
        assert_eq!(last_emitted, stored.time.tick);
        assert_eq!(stored.phase, DashboardPhase::Running);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = DashboardEngine::new(DashboardConfig::default());
        for _ in 0..120 {
            engine.tick();
        }
        let snapshot = engine.tick();

        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
