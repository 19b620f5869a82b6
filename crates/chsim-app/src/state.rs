//! State shared between the handlers and the dashboard loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use chsim_core::commands::DashboardCommand;
use chsim_core::state::DashboardSnapshot;
use chsim_portal::InMemoryBackend;

/// Messages from the handlers to the loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    /// Forward to the engine's command queue.
    Dashboard(DashboardCommand),
    /// Tear the dashboard down and end the thread.
    Shutdown,
}

/// Shared host state.
///
/// The sender sits behind a `Mutex` because `mpsc::Sender` is not `Sync`.
pub struct AppState {
    /// `None` until `start_dashboard`.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Written by the loop thread after every tick.
    pub latest_snapshot: Arc<Mutex<Option<DashboardSnapshot>>>,
    pub running: Mutex<bool>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Session and news feed behind the landing and news pages.
    pub portal: Mutex<InMemoryBackend>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
            portal: Mutex::new(InMemoryBackend::new()),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
