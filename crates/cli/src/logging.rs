// crates/cli/src/logging.rs
use crate::error::{AppError, Result};
use tracing_subscriber::EnvFilter;

/// Default level for the `-v`/`-q` combination. `RUST_LOG` takes precedence.
#[must_use]
pub const fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Records from the engine's `log` calls are
/// forwarded to it as well. `ansi` switches escape codes on or off.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: u8, quiet: bool, ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
