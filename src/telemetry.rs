//! Opt-in `tracing` setup for hosts embedding `logplot`.
//!
//! The engine only emits events through `tracing` macros. Hosts with their
//! own subscriber can ignore this module entirely.

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "logplot=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback filter.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_tracing_with(fallback_filter: &str) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_tracing_with(_fallback_filter: &str) -> bool {
    false
}
