//! Driver that logs one line per Fibonacci index.

use anyhow::{Context, Result};
use gowest_config::ReporterConfig;
use tracing::{debug, info, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Build the log subscriber used by the binary.
///
/// Lines are `<timestamp> <message>`: no colour, level or target. The filter
/// directive is fixed, so no environment variables are read.
pub fn log_subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_ansi(false)
        .with_level(false)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Install the stderr log subscriber as the global default.
pub fn init_logging() -> Result<()> {
    tracing::subscriber::set_global_default(log_subscriber(std::io::stderr))
        .context("Failed to install log subscriber")
}

/// Log every entry of the configured report, in order.
pub fn report(config: &ReporterConfig) -> Result<usize> {
    let reporter = config
        .reporter()
        .context("Failed to build Fibonacci reporter")?;

    debug!(
        limit = reporter.limit(),
        algorithm = ?reporter.algorithm(),
        "Starting report"
    );
    let count = reporter.run(|entry| info!("{}", entry));
    debug!(count, "Report finished");
    Ok(count)
}

pub fn run() -> Result<()> {
    init_logging()?;
    report(&ReporterConfig::default())?;
    Ok(())
}
