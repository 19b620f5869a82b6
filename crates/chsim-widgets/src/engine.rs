//! Dashboard engine. Owns every widget and advances them in lockstep.
//!
//! `DashboardEngine` holds the single seeded RNG, processes operator
//! commands at tick boundaries, runs the widgets in a fixed order, and
//! produces `DashboardSnapshot`s. Completely headless, so a fixed seed and
//! command sequence always yields the same snapshots.

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chsim_core::commands::DashboardCommand;
use chsim_core::constants::*;
use chsim_core::enums::DashboardPhase;
use chsim_core::events::DashboardEvent;
use chsim_core::state::DashboardSnapshot;
use chsim_core::types::{SimTime, WallClock};

use crate::advisory::{Conditions, CowAdvisory};
use crate::anomaly_log::AnomalyLog;
use crate::mesh::MeshRefiner;
use crate::radar::{RadarConfig, RadarEvent, SwanRadar};
use crate::sbb_clock::SbbEngine;
use crate::snapshot::{self, SnapshotInputs};
use crate::ticker::CowTicker;

/// Configuration for mounting a dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// RNG seed for determinism. Same seed = same dashboard.
    pub seed: u64,
    /// Wall-clock time at mount, for the station clock and log stamps.
    pub start_time: WallClock,
    pub radar: RadarConfig,
    /// Initial mesh density slider position.
    pub initial_density: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_time: WallClock::new(12, 0, 0),
            radar: RadarConfig::default(),
            initial_density: 100,
        }
    }
}

pub struct DashboardEngine {
    time: SimTime,
    phase: DashboardPhase,
    rng: ChaCha8Rng,
    start_time: WallClock,
    command_queue: VecDeque<DashboardCommand>,
    events: Vec<DashboardEvent>,

    radar: SwanRadar,
    clock: SbbEngine,
    mesh: MeshRefiner,
    advisory: CowAdvisory,
    ticker: CowTicker,
    log: AnomalyLog,

    /// Remaining time the breach flag stays raised.
    breach_flag_ms: u64,
    shake_ms: u64,
}

impl DashboardEngine {
    /// Mount a dashboard: scatter the initial blips and start every widget.
    pub fn new(config: DashboardConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut radar = SwanRadar::new(config.radar);
        radar.initialize(config.radar.pool_size, &mut rng);
        let clock = SbbEngine::new(config.start_time);
        let mesh = MeshRefiner::new(config.initial_density);
        let advisory = CowAdvisory::new(Conditions {
            is_day: mesh.is_day(),
            mesh_density: mesh.density(),
            radar_breach: false,
            sbb_optimized: clock.is_optimized(),
        });

        info!(
            "dashboard mounted (seed {}, {} blips)",
            config.seed,
            radar.blips().len()
        );

        Self {
            time: SimTime::default(),
            phase: DashboardPhase::default(),
            rng,
            start_time: config.start_time,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            radar,
            clock,
            mesh,
            advisory,
            ticker: CowTicker::new(),
            log: AnomalyLog::with_boot_entries(),
            breach_flag_ms: 0,
            shake_ms: 0,
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: DashboardCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = DashboardCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the dashboard by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> DashboardSnapshot {
        self.process_commands();

        if self.phase == DashboardPhase::Running {
            self.run_widgets();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Current state without advancing time or draining events.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.build_snapshot(Vec::new())
    }

    pub fn phase(&self) -> DashboardPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Time of day on the dashboard.
    pub fn wall_clock(&self) -> WallClock {
        self.start_time.advanced_by(self.time.elapsed_ms)
    }

    pub fn radar(&self) -> &SwanRadar {
        &self.radar
    }

    pub fn clock(&self) -> &SbbEngine {
        &self.clock
    }

    pub fn mesh(&self) -> &MeshRefiner {
        &self.mesh
    }

    pub fn log(&self) -> &AnomalyLog {
        &self.log
    }

    fn conditions(&self) -> Conditions {
        Conditions {
            is_day: self.mesh.is_day(),
            mesh_density: self.mesh.density(),
            radar_breach: self.breach_flag_ms > 0,
            sbb_optimized: self.clock.is_optimized(),
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if self.phase == DashboardPhase::TornDown {
                self.command_queue.clear();
                break;
            }
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: DashboardCommand) {
        match command {
            DashboardCommand::NeutralizeBlip { blip_id } => {
                match self.radar.neutralize(blip_id, &mut self.rng) {
                    Some(event) => self.events.push(event.into()),
                    None => debug!("{blip_id} already gone, nothing to neutralize"),
                }
            }
            DashboardCommand::SetMeshDensity { density } => {
                self.mesh.set_density(density);
            }
            DashboardCommand::PressSync => self.clock.press(),
            DashboardCommand::ReleaseSync => self.clock.release(),
            DashboardCommand::Pause => {
                if self.phase == DashboardPhase::Running {
                    self.phase = DashboardPhase::Paused;
                }
            }
            DashboardCommand::Resume => {
                if self.phase == DashboardPhase::Paused {
                    self.phase = DashboardPhase::Running;
                }
            }
            DashboardCommand::TearDown => {
                info!("dashboard torn down at tick {}", self.time.tick);
                self.phase = DashboardPhase::TornDown;
                self.events.clear();
            }
        }
    }

    /// Run all widgets in order.
    fn run_widgets(&mut self) {
        let dt = TICK_MS;
        self.breach_flag_ms = self.breach_flag_ms.saturating_sub(dt);
        self.shake_ms = self.shake_ms.saturating_sub(dt);
        let stamp = self.wall_clock().hhmm();

        // 1. Swan radar
        for event in self.radar.tick(&mut self.rng) {
            if let RadarEvent::Breach { blip_id, angle_deg } = event {
                warn!("kernel breach by {blip_id} at {angle_deg:.0}°");
                self.log.record_breach(&mut self.rng, &stamp);
                self.breach_flag_ms = BREACH_FLAG_MS;
                self.shake_ms = self.shake_ms.max(BREACH_FLAG_MS);
            }
            self.events.push(event.into());
        }

        // 2. SBB clock and delay game
        for event in self.clock.advance(dt, &mut self.rng) {
            if event == DashboardEvent::ScheduleRecovered {
                self.log.record_recovery(&mut self.rng, &stamp);
            }
            self.events.push(event);
        }

        // 3. Mesh refiner
        for event in self.mesh.advance(dt) {
            if let DashboardEvent::Penalty { reason } = event {
                self.log.record_penalty(&mut self.rng, &stamp, reason);
                self.shake_ms = self.shake_ms.max(PENALTY_SHAKE_MS);
            }
            self.events.push(event);
        }

        // 4. Cow advisory
        if let Some(kind) = self.advisory.update_conditions(self.conditions()) {
            self.events.push(DashboardEvent::AdvisoryChanged { kind });
        }
        if let Some(kind) = self.advisory.advance(dt, &mut self.rng) {
            self.events.push(DashboardEvent::AdvisoryChanged { kind });
        }

        // 5. Status ticker
        self.ticker.advance(dt, &mut self.rng);
    }

    fn build_snapshot(&self, events: Vec<DashboardEvent>) -> DashboardSnapshot {
        snapshot::build_snapshot(
            SnapshotInputs {
                time: self.time,
                phase: self.phase,
                radar: &self.radar,
                breach_active: self.breach_flag_ms > 0,
                clock: &self.clock,
                mesh: &self.mesh,
                advisory: &self.advisory,
                ticker: &self.ticker,
                log: &self.log,
                shaking: self.shake_ms > 0,
            },
            events,
        )
    }
}
