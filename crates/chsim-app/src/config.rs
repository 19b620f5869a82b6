//! Command-line configuration for the `chsim` binary.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use chsim_core::types::WallClock;
use chsim_widgets::DashboardConfig;

/// Headless CH-SIMULATOR kernel dashboard
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// RNG seed; the same seed replays the same dashboard
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of 16 ms ticks to run
    #[arg(long, default_value_t = 3_750)]
    pub ticks: u64,

    /// Pace ticks in wall time on the loop thread
    #[arg(long)]
    pub realtime: bool,

    /// Neutralize blips once they enter the proximity ring
    #[arg(long)]
    pub autopilot: bool,

    /// Initial mesh density slider position
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub density: u8,

    /// Wall-clock start as HH:MM[:SS]; defaults to the current UTC time
    #[arg(long, value_parser = parse_wall_clock)]
    pub start: Option<WallClock>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            seed: self.seed,
            start_time: self.start.unwrap_or_else(utc_now),
            initial_density: self.density,
            ..DashboardConfig::default()
        }
    }
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_wall_clock(value: &str) -> Result<WallClock, String> {
    let parts: Vec<&str> = value.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(format!("expected HH:MM[:SS], got {value:?}"));
    }

    let field = |index: usize, max: u32| -> Result<u32, String> {
        let Some(raw) = parts.get(index) else {
            return Ok(0);
        };
        let n: u32 = raw
            .parse()
            .map_err(|_| format!("{raw:?} is not a number"))?;
        if n > max {
            return Err(format!("{n} is out of range (max {max})"));
        }
        Ok(n)
    };

    Ok(WallClock::new(field(0, 23)?, field(1, 59)?, field(2, 59)?))
}

fn utc_now() -> WallClock {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    WallClock::new(0, 0, 0).advanced_by(secs % 86_400 * 1_000)
}
