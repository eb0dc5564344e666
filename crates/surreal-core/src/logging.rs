#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports `tracing::debug` when the `tracing` feature is enabled and
//! provides a no-op `debug!` otherwise, so call sites never need their own
//! `#[cfg]` guards.

#[cfg(feature = "tracing")]
pub use tracing::debug;

/// No-op debug macro when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// Install a JSON formatter as the global subscriber, filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Returns an
/// error if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}
