use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the global logger for `chsim`.
///
/// `--verbose` lowers the default filter to debug, which surfaces per-blip
/// radar detail and advisory changes. `RUST_LOG` still wins.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // Fails only when a logger is already installed.
    let _ = builder.try_init();
}
