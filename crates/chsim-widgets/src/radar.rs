//! Swan radar: blips approaching the scope center.
//!
//! The pool is plain data. `advance` and `neutralize` are functions from the
//! old pool to a new pool plus the events it produced, so the radar can be
//! driven and tested without any UI or timer. `SwanRadar` wraps them for
//! owners that prefer mutating in place.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use chsim_core::components::Blip;
use chsim_core::constants::*;
use chsim_core::events::DashboardEvent;
use chsim_core::types::BlipId;

/// Tuning for the blip pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    /// Blips kept on the scope.
    pub pool_size: usize,
    /// Distance at or below which a blip has breached.
    pub breach_threshold: f64,
    /// Respawned blips start here.
    pub edge_distance: f64,
    /// Initial blips are scattered over `[scatter_min_distance, edge_distance)`.
    pub scatter_min_distance: f64,
    /// Speeds are drawn from `[speed_min, speed_max)`.
    pub speed_min: f64,
    pub speed_max: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            pool_size: RADAR_POOL_SIZE,
            breach_threshold: BREACH_THRESHOLD,
            edge_distance: BLIP_EDGE_DISTANCE,
            scatter_min_distance: BLIP_SCATTER_MIN_DISTANCE,
            speed_min: BLIP_SPEED_MIN,
            speed_max: BLIP_SPEED_MAX,
        }
    }
}

/// Radar notifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RadarEvent {
    /// `blip_id` reached the center; it has been replaced.
    Breach { blip_id: BlipId, angle_deg: f64 },
    /// `blip_id` was clicked away and replaced by `replacement`.
    Neutralized { blip_id: BlipId, replacement: BlipId },
}

impl From<RadarEvent> for DashboardEvent {
    fn from(event: RadarEvent) -> Self {
        match event {
            RadarEvent::Breach { blip_id, angle_deg } => {
                DashboardEvent::Breach { blip_id, angle_deg }
            }
            RadarEvent::Neutralized {
                blip_id,
                replacement,
            } => DashboardEvent::Neutralized {
                blip_id,
                replacement,
            },
        }
    }
}

/// The blip pool and its id allocator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarState {
    blips: Vec<Blip>,
    next_id: u64,
}

impl RadarState {
    /// Build a pool from explicit blips. Ids handed out later start above the
    /// largest id present.
    pub fn from_blips(blips: Vec<Blip>) -> Self {
        let next_id = blips.iter().map(|b| b.id.0 + 1).max().unwrap_or(1);
        Self { blips, next_id }
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }

    pub fn len(&self) -> usize {
        self.blips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blips.is_empty()
    }

    pub fn get(&self, id: BlipId) -> Option<&Blip> {
        self.blips.iter().find(|b| b.id == id)
    }

    fn allocate_id(&mut self) -> BlipId {
        let id = BlipId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    fn spawn<R: Rng>(&mut self, config: &RadarConfig, rng: &mut R, distance: f64) -> Blip {
        Blip {
            id: self.allocate_id(),
            angle_deg: rng.gen_range(0.0..360.0),
            distance,
            speed: sample(rng, config.speed_min, config.speed_max),
        }
    }

    fn spawn_at_edge<R: Rng>(&mut self, config: &RadarConfig, rng: &mut R) -> Blip {
        self.spawn(config, rng, config.edge_distance)
    }
}

/// Output of one radar transition.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarStep {
    pub state: RadarState,
    pub events: Vec<RadarEvent>,
}

/// Uniform draw from `[lo, hi)`, or `lo` when the range is empty.
fn sample<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Fill a fresh pool with `count` blips at scattered distances so they do
/// not all arrive together.
pub fn initialize<R: Rng>(config: &RadarConfig, rng: &mut R, count: usize) -> RadarState {
    let mut state = RadarState::default();
    for _ in 0..count {
        let distance = sample(rng, config.scatter_min_distance, config.edge_distance);
        let blip = state.spawn(config, rng, distance);
        state.blips.push(blip);
    }
    state
}

/// Advance every blip by its speed. Blips that reach the threshold emit one
/// breach each and are replaced in place by an edge spawn.
///
/// Every blip moves from the same prior pool; replacements only take effect
/// in the returned state.
pub fn advance<R: Rng>(state: &RadarState, config: &RadarConfig, rng: &mut R) -> RadarStep {
    let mut next = RadarState {
        blips: Vec::with_capacity(state.blips.len()),
        next_id: state.next_id,
    };
    let mut events = Vec::new();

    for blip in &state.blips {
        let distance = blip.distance - blip.speed;
        if distance <= config.breach_threshold {
            events.push(RadarEvent::Breach {
                blip_id: blip.id,
                angle_deg: blip.angle_deg,
            });
            let fresh = next.spawn_at_edge(config, rng);
            debug!("{} breached at {:.1}°, respawned as {}", blip.id, blip.angle_deg, fresh.id);
            next.blips.push(fresh);
        } else {
            next.blips.push(Blip { distance, ..*blip });
        }
    }

    RadarStep {
        state: next,
        events,
    }
}

/// Replace blip `id` with an edge spawn. Returns `None` when the blip is
/// already gone (breached or neutralized earlier); that is not an error.
pub fn neutralize<R: Rng>(
    state: &RadarState,
    id: BlipId,
    config: &RadarConfig,
    rng: &mut R,
) -> Option<RadarStep> {
    let index = state.blips.iter().position(|b| b.id == id)?;

    let mut next = state.clone();
    let fresh = next.spawn_at_edge(config, rng);
    next.blips[index] = fresh;
    debug!("{} neutralized, respawned as {}", id, fresh.id);

    Some(RadarStep {
        state: next,
        events: vec![RadarEvent::Neutralized {
            blip_id: id,
            replacement: fresh.id,
        }],
    })
}

/// A radar instance owning its pool and configuration.
#[derive(Debug, Clone, Default)]
pub struct SwanRadar {
    config: RadarConfig,
    state: RadarState,
}

impl SwanRadar {
    pub fn new(config: RadarConfig) -> Self {
        Self {
            config,
            state: RadarState::default(),
        }
    }

    /// Replace the pool with `count` freshly scattered blips.
    pub fn initialize<R: Rng>(&mut self, count: usize, rng: &mut R) {
        self.state = initialize(&self.config, rng, count);
    }

    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<RadarEvent> {
        let step = advance(&self.state, &self.config, rng);
        self.state = step.state;
        step.events
    }

    pub fn neutralize<R: Rng>(&mut self, id: BlipId, rng: &mut R) -> Option<RadarEvent> {
        let step = neutralize(&self.state, id, &self.config, rng)?;
        self.state = step.state;
        step.events.into_iter().next()
    }

    /// Read-only view of the pool for rendering.
    pub fn blips(&self) -> &[Blip] {
        self.state.blips()
    }

    pub fn state(&self) -> &RadarState {
        &self.state
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }
}
