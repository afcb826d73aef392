//! Logging setup using tracing.
//!
//! Log lines go to stderr so command output on stdout (tables, JSON) stays
//! machine-readable.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `verbosity` - Number of `-v` flags passed (0=warn, 1=info, 2=debug, 3+=trace)
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // try_init so repeated calls (tests, library consumers) are harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
