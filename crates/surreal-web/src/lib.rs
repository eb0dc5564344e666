#![forbid(unsafe_code)]

//! `surreal-web` exposes the landing core to a browser host.
//!
//! Design goals:
//! - **Host-driven input**: the embedding page pushes click, touch and scroll
//!   events as [`LandingEvent`] values (or their JSON form).
//! - **Deterministic time**: the host advances a monotonic clock explicitly
//!   once per animation frame.
//! - **JSON boundary**: snapshots, particle fields and inline styles cross the
//!   JS/WASM boundary as JSON strings.
//!
//! On `wasm32` the [`SurrealLanding`] class wraps a [`LandingSession`] with a
//! `wasm-bindgen` API. Native builds expose the same session for tests.

pub mod config;
pub mod event;
pub mod session;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::SurrealLanding;

pub use config::{LandingConfig, RevealConfig};
pub use event::LandingEvent;
pub use session::{LandingSession, LandingSnapshot};

use core::time::Duration;

use surreal_core::ConfigError;
use thiserror::Error;

/// Errors surfaced across the host boundary.
#[derive(Debug, Error)]
pub enum LandingError {
    /// A config value was rejected by the core.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    /// JSON did not match the expected schema.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }
}

/// Convert a host frame delta in milliseconds to a [`Duration`].
///
/// Negative, NaN and infinite values become zero; JS timers occasionally
/// report those after tab switches. Finite values too large for a
/// [`Duration`] saturate at [`Duration::MAX`].
#[must_use]
pub fn duration_from_host_ms(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}
