#![forbid(unsafe_code)]

//! Structured logging re-exports and initialization.
//!
//! Gated behind the `tracing` feature so the input layer stays
//! zero-dependency for embedders that bring their own subscriber.

pub use tracing::{debug, error, info, trace, warn};

/// Initialize a JSON subscriber with `RUST_LOG`-style filtering.
///
/// Intended for production builds on the device, where logs are collected
/// as line-delimited JSON. No-op if a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
