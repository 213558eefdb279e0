//! Helpers shared by the demonstration binaries.

use argtree_core::Error;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Sends logs to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Indented JSON rendering of `value`.
pub fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unprintable: {err}>"))
}

/// Unwraps `result`, or prints the diagnostic and exits with status 1.
pub fn or_exit<T>(result: Result<T, Error>) -> T {
    result.unwrap_or_else(|err| err.exit())
}
