//! Logging setup for the CLI

use tracing_subscriber::EnvFilter;

/// Initialize tracing with an environment-driven filter
///
/// `RUST_LOG` takes precedence; otherwise `warn` by default, `debug` when
/// verbose output is requested.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
