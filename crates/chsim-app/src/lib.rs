//! CH-SIMULATOR host.
//!
//! Runs the dashboard engine on its own thread, exposes handlers for the
//! page layer, and drives headless runs for the `chsim` binary.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod logging;
pub mod runner;
pub mod state;

pub use chsim_core as core;
pub use error::AppError;
