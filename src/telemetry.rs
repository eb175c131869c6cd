//! Opt-in `tracing` setup for hosts and tools embedding `deck-rs`.
//!
//! Navigation logs at `debug`, timer firings at `trace`. Browser hosts usually
//! bring their own subscriber; native tools can call one of the helpers below.

/// Filter used when `RUST_LOG` is unset: deck events at `info`, others at `warn`.
pub const DEFAULT_DECK_FILTER: &str = "warn,deck_rs=info";

/// Installs a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_DECK_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_DECK_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact fmt subscriber with explicit filter `directives`,
/// ignoring `RUST_LOG`. Invalid directives leave tracing uninstalled.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
