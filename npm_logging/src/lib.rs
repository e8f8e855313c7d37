//! Logging bootstrap shared by the libnpm crates.
//!
//! Library code logs through the `log` facade under the `"npm"` target. Binaries and
//! tests call [`setup_log`] once to route those records into a `tracing` fmt subscriber.
//!
//! The filter is read from `NPM_LOG`, then `RUST_LOG`, then falls back to [`DEFAULT_DIRECTIVE`].

pub use tracing::{self, debug, error, info, trace, warn};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`
pub const LOG_ENV_VAR: &str = "NPM_LOG";
/// Used when neither environment variable is set
pub const DEFAULT_DIRECTIVE: &str = "npm=info";

/// Sets up the logging for any crate
pub fn setup_log() {
    std::panic::set_hook(Box::new(|info| {
        error!(target: "npm", "Panic occurred: {}", info);
        std::process::exit(1);
    }));

    setup_log_no_panic_hook()
}

pub fn setup_log_no_panic_hook() {
    let _ = SubscriberBuilder::default()
        .with_line_number(true)
        .with_file(true)
        .with_span_events(FmtSpan::NONE)
        .with_env_filter(env_filter())
        .finish()
        .try_init();
}

fn env_filter() -> EnvFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
