//! Tracing setup helpers for applications embedding `napchart-rs`.
//!
//! The crate only emits `tracing` events; installing a subscriber is left
//! to the host. This module offers an opt-in default for binaries that do
//! not wire their own.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when nothing is installed (feature disabled) or another
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
