//! Tracing setup for the board and its display binary.

/// Initializes structured logging for the process.
///
/// Verbosity is controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` — lifecycle events and refresh failures
/// - `RUST_LOG=debug` — every refresh, advance, and snapshot replacement
/// - `RUST_LOG=kitchen_board=debug` — debug for this crate only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
