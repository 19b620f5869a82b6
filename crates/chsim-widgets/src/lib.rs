//! Widget simulations for the CH-SIMULATOR kernel dashboard.
//!
//! Every widget is a headless state machine advanced by the dashboard tick;
//! `DashboardEngine` owns them all and produces `DashboardSnapshot`s.

pub mod advisory;
pub mod anomaly_log;
pub mod engine;
pub mod mesh;
pub mod radar;
pub mod sbb_clock;
pub mod snapshot;
pub mod ticker;
pub mod typewriter;

pub use chsim_core as core;
pub use engine::{DashboardConfig, DashboardEngine};
