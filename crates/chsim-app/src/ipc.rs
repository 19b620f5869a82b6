//! Handlers invoked by the page layer.
//!
//! Dashboard handlers bridge to the loop thread over the command channel.
//! Portal handlers run the page actions against the shared backend.

use chsim_core::commands::DashboardCommand;
use chsim_core::state::DashboardSnapshot;
use chsim_portal::actions::{self, Route};
use chsim_portal::model::{Credentials, NewPost, NewsPost};
use chsim_widgets::DashboardConfig;

use crate::error::AppError;
use crate::game_loop::{self, SnapshotSink};
use crate::state::{AppState, LoopCommand};

/// Mount the dashboard. Fails if one is already running.
pub fn start_dashboard<S: SnapshotSink>(
    state: &AppState,
    config: DashboardConfig,
    sink: S,
) -> Result<(), AppError> {
    let mut running = state
        .running
        .lock()
        .map_err(|_| AppError::LockPoisoned("running"))?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_dashboard_loop(config, sink, state.latest_snapshot.clone())?;

    *state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned("command_tx"))? = Some(cmd_tx);
    *state
        .loop_handle
        .lock()
        .map_err(|_| AppError::LockPoisoned("loop_handle"))? = Some(handle);
    *running = true;

    Ok(())
}

pub fn send_command(state: &AppState, command: DashboardCommand) -> Result<(), AppError> {
    let tx_lock = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned("command_tx"))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Dashboard(command))
            .map_err(|_| AppError::LoopStopped),
        None => Err(AppError::NotStarted),
    }
}

/// Latest snapshot, for polling and initial render.
pub fn get_snapshot(state: &AppState) -> Result<Option<DashboardSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::LockPoisoned("latest_snapshot"))?;
    Ok(lock.clone())
}

/// Unmount the dashboard and wait for the loop thread to finish.
pub fn stop_dashboard(state: &AppState) -> Result<(), AppError> {
    let mut running = state
        .running
        .lock()
        .map_err(|_| AppError::LockPoisoned("running"))?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned("command_tx"))?
        .take()
    {
        // The loop may already be gone; joining below covers that.
        let _ = tx.send(LoopCommand::Shutdown);
    }

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::LockPoisoned("loop_handle"))?
        .take();
    *running = false;

    match handle {
        Some(handle) => handle.join().map_err(|_| AppError::LoopPanicked),
        None => Ok(()),
    }
}

pub fn login(state: &AppState, credentials: &Credentials) -> Result<Route, AppError> {
    let mut portal = state
        .portal
        .lock()
        .map_err(|_| AppError::LockPoisoned("portal"))?;
    Ok(actions::login(&mut *portal, credentials))
}

pub fn signup(state: &AppState, credentials: &Credentials) -> Result<Route, AppError> {
    let mut portal = state
        .portal
        .lock()
        .map_err(|_| AppError::LockPoisoned("portal"))?;
    Ok(actions::signup(&mut *portal, credentials))
}

pub fn signout(state: &AppState) -> Result<Route, AppError> {
    let mut portal = state
        .portal
        .lock()
        .map_err(|_| AppError::LockPoisoned("portal"))?;
    Ok(actions::signout(&mut *portal))
}

/// `None` means nobody is signed in and the page stays put.
pub fn publish_news(state: &AppState, post: NewPost) -> Result<Option<Route>, AppError> {
    let mut portal = state
        .portal
        .lock()
        .map_err(|_| AppError::LockPoisoned("portal"))?;
    Ok(actions::publish_news(&mut *portal, post))
}

pub fn news_feed(state: &AppState) -> Result<Vec<NewsPost>, AppError> {
    let portal = state
        .portal
        .lock()
        .map_err(|_| AppError::LockPoisoned("portal"))?;
    Ok(actions::news_feed(&*portal))
}
