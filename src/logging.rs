//! Log subscriber setup for the binary
//!
//! Library code only emits `tracing` events. The binary installs the
//! subscriber once, before any command runs.
//!
//! Filter precedence: `RUST_LOG`, then `--verbose` (debug), then the `log`
//! value of the configuration, then `info`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive to use when `RUST_LOG` is unset
pub fn filter_directive(configured: Option<&str>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    configured
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the stderr subscriber
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logging(configured: Option<&str>, verbose: bool) {
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::try_new(filter_directive(configured, verbose))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .without_time()
                .with_ansi(std::env::var_os("NO_COLOR").is_none()),
        )
        .with(env_filter)
        .try_init();
}
