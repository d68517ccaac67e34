use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `RPS_LOG=debug`.
pub const LOG_ENV: &str = "RPS_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber. Stdout carries only the table.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
