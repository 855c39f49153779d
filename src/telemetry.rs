//! Telemetry helpers for hosts embedding `area-drag-chart`.
//!
//! Drag resolution emits `trace!` events per pointer move and `debug!` events
//! on press, release and rejection. Hosts either call one of the helpers below
//! or install their own `tracing` subscriber.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback directive,
/// e.g. `"area_drag_chart=trace"` to follow every drag tick.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
