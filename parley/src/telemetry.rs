//! Tracing subscriber setup for the terminal front end.

use tracing_subscriber::EnvFilter;

use crate::ParleyError;

/// Filter used when `RUST_LOG` is unset. Terminal output stays readable at `warn`.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
pub fn init_tracing() -> Result<(), ParleyError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| ParleyError::Telemetry(err.to_string()))
}
