use thiserror::Error;

/// Failures surfaced by the host handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dashboard already running")]
    AlreadyRunning,

    #[error("Dashboard not started")]
    NotStarted,

    #[error("Dashboard loop has stopped")]
    LoopStopped,

    #[error("Dashboard loop thread panicked")]
    LoopPanicked,

    #[error("Shared state lock poisoned: {0}")]
    LockPoisoned(&'static str),

    #[error("Failed to spawn dashboard loop: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
