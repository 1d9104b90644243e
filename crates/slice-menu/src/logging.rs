//! # Logging Setup
//!
//! Installs a `tracing-subscriber` for applications embedding the builder.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - every click (size, crust, topping changes)
//! - `RUST_LOG=slice_core=trace` - configurator internals only
//! - Default: INFO, with debug output from the slice crates

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,slice_core=debug,slice_menu=debug";

/// Initializes the global tracing subscriber.
///
/// Returns `false` if the host application already installed one.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
