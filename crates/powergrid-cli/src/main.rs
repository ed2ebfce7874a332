//! Power grid maintenance runner
//!
//! Runs maintenance query scenarios against a power grid interconnection and
//! prints one JSON result array per scenario.
//!
//! Usage: `powergrid [--strict] [demo | - | <scenario.json>]`

mod config;
mod error;
mod runner;

use config::RunnerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunnerConfig::from_env().with_args(std::env::args().skip(1));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(source = ?config.source, strict = config.strict, "starting powergrid runner");

    let jobs = runner::load(&config.source)?;
    let stdout = std::io::stdout();
    runner::run_checked(&config, &jobs, &mut stdout.lock())?;

    Ok(())
}
