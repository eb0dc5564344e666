#![forbid(unsafe_code)]

//! Reveal transition played when the intro gate opens.
//!
//! Two tracks run from the moment the gate flips to `Revealed`:
//!
//! - **Intro exit**: the intro layer fades from opacity 1 to 0 while scaling
//!   from 1 to `intro_exit_scale`, on a quadratic ease-in-out curve.
//! - **Content entry**: the main content stays hidden for `content_delay`,
//!   then fades in linearly over `content_fade`.
//!
//! The host unmounts the intro layer once
//! [`intro_exit_complete`](RevealTransition::intro_exit_complete) is true.

use std::time::Duration;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// Maps linear progress in [0, 1] to eased progress in [0, 1].
pub type Easing = fn(f32) -> f32;

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out, the curve of the intro exit.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// RevealTrack
// ---------------------------------------------------------------------------

/// One eased track of the reveal: idle for `lead_in`, then 0.0 to 1.0 over
/// `span`.
///
/// Elapsed time is kept as a [`Duration`] so frame deltas accumulate without
/// drift. A zero `span` jumps to 1.0 as soon as the lead-in has passed.
#[derive(Debug, Clone, Copy)]
pub struct RevealTrack {
    lead_in: Duration,
    span: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl RevealTrack {
    #[must_use]
    pub fn new(lead_in: Duration, span: Duration, easing: Easing) -> Self {
        Self {
            lead_in,
            span,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Linear progress before easing, in [0.0, 1.0].
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        let Some(active) = self.elapsed.checked_sub(self.lead_in) else {
            return 0.0;
        };
        if self.span.is_zero() {
            return 1.0;
        }
        ((active.as_secs_f64() / self.span.as_secs_f64()) as f32).clamp(0.0, 1.0)
    }

    /// Eased progress, in [0.0, 1.0].
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.lead_in.saturating_add(self.span)
    }
}

// ---------------------------------------------------------------------------
// RevealTiming
// ---------------------------------------------------------------------------

/// Timing of the reveal transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    /// Default: 1.5s
    pub intro_exit: Duration,
    /// Default: 0.5s
    pub content_delay: Duration,
    /// Default: 2s
    pub content_fade: Duration,
    /// Final scale of the intro layer.
    /// Default: 1.1
    pub intro_exit_scale: f32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            intro_exit: Duration::from_millis(1500),
            content_delay: Duration::from_millis(500),
            content_fade: Duration::from_secs(2),
            intro_exit_scale: 1.1,
        }
    }
}

impl RevealTiming {
    /// Build timing from seconds, as supplied by a host.
    pub fn from_secs(
        intro_exit: f32,
        content_delay: f32,
        content_fade: f32,
        intro_exit_scale: f32,
    ) -> Result<Self, ConfigError> {
        if !intro_exit_scale.is_finite() || intro_exit_scale <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                field: "intro_exit_scale",
                value: intro_exit_scale,
            });
        }
        Ok(Self {
            intro_exit: secs("intro_exit", intro_exit)?,
            content_delay: secs("content_delay", content_delay)?,
            content_fade: secs("content_fade", content_fade)?,
            intro_exit_scale,
        })
    }

    /// Time from dismissal until both tracks have finished.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.intro_exit
            .max(self.content_delay.saturating_add(self.content_fade))
    }
}

fn secs(field: &'static str, value: f32) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f32(value).map_err(|_| ConfigError::InvalidDuration { field, value })
}

// ---------------------------------------------------------------------------
// RevealTransition
// ---------------------------------------------------------------------------

/// Running reveal transition.
#[derive(Debug, Clone)]
pub struct RevealTransition {
    timing: RevealTiming,
    intro: RevealTrack,
    content: RevealTrack,
    elapsed: Duration,
    finished: bool,
}

impl RevealTransition {
    /// Start a transition at time zero.
    #[must_use]
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            timing,
            intro: RevealTrack::new(Duration::ZERO, timing.intro_exit, ease_in_out),
            content: RevealTrack::new(timing.content_delay, timing.content_fade, linear),
            elapsed: Duration::ZERO,
            finished: false,
        }
    }

    /// Advance both tracks by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.finished {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        self.intro.advance(dt);
        self.content.advance(dt);
        if self.intro.is_finished() && self.content.is_finished() {
            self.finished = true;
            crate::debug!(
                elapsed_ms = self.elapsed.as_millis() as u64,
                "reveal transition complete"
            );
        }
    }

    /// Opacity of the intro layer, 1.0 down to 0.0.
    #[must_use]
    pub fn intro_opacity(&self) -> f32 {
        1.0 - self.intro.progress()
    }

    /// Scale of the intro layer, 1.0 up to `intro_exit_scale`.
    #[must_use]
    pub fn intro_scale(&self) -> f32 {
        1.0 + (self.timing.intro_exit_scale - 1.0) * self.intro.progress()
    }

    /// Opacity of the main content, 0.0 up to 1.0.
    #[must_use]
    pub fn content_opacity(&self) -> f32 {
        self.content.progress()
    }

    /// Whether the intro layer has fully faded out.
    #[must_use]
    pub fn intro_exit_complete(&self) -> bool {
        self.intro.is_finished()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }
}
