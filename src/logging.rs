//! Tracing setup for the command-line tool
//!
//! Diagnostics go to stderr so the report on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber
///
/// Calling it more than once keeps the first subscriber.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::new(format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        level_for_verbosity(verbosity)
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
