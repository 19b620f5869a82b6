//! Dashboard constants and tuning parameters.

/// Milliseconds per tick. The radar advances once per tick.
pub const TICK_MS: u64 = 16;

// --- Swan radar ---

/// Number of blips kept on the scope.
pub const RADAR_POOL_SIZE: usize = 3;

/// Normalized distance of the scope edge.
pub const BLIP_EDGE_DISTANCE: f64 = 100.0;

/// Lower bound of the scattered distance used for the initial pool.
pub const BLIP_SCATTER_MIN_DISTANCE: f64 = 80.0;

/// A blip at or below this distance has reached the center.
pub const BREACH_THRESHOLD: f64 = 2.0;

/// Per-tick approach speed range `[min, max)`.
pub const BLIP_SPEED_MIN: f64 = 0.05;
pub const BLIP_SPEED_MAX: f64 = 0.15;

/// Blips closer than this are drawn with a proximity pulse.
pub const PROXIMITY_WARNING_DISTANCE: f64 = 30.0;

/// How long the breach flag stays raised after a breach (ms).
pub const BREACH_FLAG_MS: u64 = 1_000;

// --- SBB clock ---

/// One full second-hand cycle (ms).
pub const SBB_CYCLE_MS: u64 = 60_000;

/// Portion of the cycle spent sweeping; the rest is the rest at twelve.
pub const SBB_SWEEP_MS: u64 = 58_500;

/// Interval between schedule drift checks (ms).
pub const SBB_DRIFT_CHECK_MS: u64 = 20_000;

/// Delays a drift can introduce (seconds).
pub const SBB_DRIFT_DELAYS: [u32; 3] = [3, 5, 8];

/// Holding time that recovers one second of delay (ms).
pub const SBB_HOLD_STEP_MS: u64 = 1_000;

/// Train lap duration on time and when delayed (seconds).
pub const TRAIN_LAP_NOMINAL_SECS: f64 = 6.0;
pub const TRAIN_LAP_DELAYED_SECS: f64 = 12.0;

// --- Mesh refiner ---

/// Day and night each last this long (ms).
pub const DAY_NIGHT_PERIOD_MS: u64 = 15_000;

/// Countdown shown next to the sun/moon, in seconds.
pub const DAY_NIGHT_COUNTDOWN_SECS: u32 = 15;

/// Penalty check interval and cooldown (ms).
pub const PENALTY_CHECK_MS: u64 = 1_000;
pub const PENALTY_COOLDOWN_MS: u64 = 2_000;

/// Daytime densities below this are penalized.
pub const DAY_MIN_DENSITY: u8 = 80;

/// Nighttime densities above this are penalized.
pub const NIGHT_MAX_DENSITY: u8 = 20;

/// Coarsest pixel block size (density 0).
pub const MAX_PIXEL_SCALE: u32 = 20;

/// Screen shake after a penalty (ms).
pub const PENALTY_SHAKE_MS: u64 = 500;

// --- Cow advisory ---

/// Daytime density at or above which the mesh counts as calibrated.
pub const ADVISORY_DAY_DENSITY: u8 = 70;

/// Nighttime density at or below which the mesh counts as calibrated.
pub const ADVISORY_NIGHT_DENSITY: u8 = 30;

/// Nighttime density above which the urgent energy warning fires.
pub const ADVISORY_URGENT_NIGHT_DENSITY: u8 = 40;

/// Quiet time before an idle remark (ms).
pub const ADVISORY_IDLE_MS: u64 = 30_000;

/// Idle check interval (ms).
pub const ADVISORY_IDLE_CHECK_MS: u64 = 1_000;

/// Typewriter speed for advisory messages (ms per character).
pub const ADVISORY_TYPE_MS: u64 = 20;

// --- CH-COW-01 ticker ---

pub const TICKER_ROTATE_MS: u64 = 5_000;
pub const TICKER_TYPE_MS: u64 = 28;
pub const TICKER_CURSOR_BLINK_MS: u64 = 500;

// --- Anomaly log ---

/// Entries kept in the security feed.
pub const LOG_CAPACITY: usize = 10;
