use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LINESTAT_LOG=debug`.
pub const LOG_ENV: &str = "LINESTAT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber; `log` records from the library crates are
/// forwarded to it. stdout is reserved for the report.
///
/// Calling it twice is harmless: the second installation is ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
