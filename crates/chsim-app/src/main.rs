use clap::Parser;
use log::info;

use chsim_app::config::Args;
use chsim_app::runner;
use chsim_app::state::AppState;
use chsim_app::{logging, AppError};

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = args.dashboard_config();
    info!(
        "CH-SIMULATOR kernel: seed {}, {} ticks from {}",
        config.seed,
        args.ticks,
        config.start_time.hhmm()
    );

    let summary = if args.realtime {
        runner::run_realtime(&AppState::new(), config, args.ticks, args.autopilot)?
    } else {
        runner::run_headless(config, args.ticks, args.autopilot)
    };

    info!(
        "breaches: {}, neutralized: {}, penalties: {}, schedule drifts: {}, alerts: {}",
        summary.tally.breaches,
        summary.tally.neutralized,
        summary.tally.penalties,
        summary.tally.drifts,
        summary.last.alert_count
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.last)?);
    }

    Ok(())
}
