#![forbid(unsafe_code)]

//! Intro gate: the full-screen intro layer and the logic that removes it.
//!
//! The gate starts in [`IntroGateState::Showing`] and flips to
//! [`IntroGateState::Revealed`] on a click or on an upward swipe whose
//! vertical distance exceeds the swipe threshold. `Revealed` is terminal.
//!
//! ```text
//! [Showing] --dismiss()--> [Revealed] --dismiss()--> [Revealed]
//! ```
//!
//! # Invariants
//!
//! 1. Initial state is `Showing`.
//! 2. The only transition is `Showing -> Revealed`, and it happens at most once.
//! 3. A gesture end without a recorded start is a no-op.
//! 4. Each recorded start is resolved at most once; the tracker is cleared on
//!    every gesture end whether or not the threshold was met.
//!
//! # Failure Modes
//!
//! - NaN coordinates: the threshold comparison is false, so the gate stays
//!   shut.
//! - Out-of-order events (end before start): absorbed silently.

use crate::error::{ConfigError, check_threshold};

/// Minimum upward swipe distance, in pixels, that dismisses the intro.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 70.0;

/// Visibility of the intro layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntroGateState {
    #[default]
    Showing,
    Revealed,
}

impl IntroGateState {
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// What caused the gate to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DismissTrigger {
    Click,
    Swipe,
}

/// Configuration for [`IntroGate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroGateConfig {
    swipe_threshold_px: f32,
}

impl IntroGateConfig {
    /// Build a config with a custom swipe threshold.
    ///
    /// Rejects negative and non-finite thresholds.
    pub fn new(swipe_threshold_px: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            swipe_threshold_px: check_threshold("swipe_threshold_px", swipe_threshold_px)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn swipe_threshold_px(&self) -> f32 {
        self.swipe_threshold_px
    }
}

impl Default for IntroGateConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

/// Vertical coordinate of an unresolved touch start.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    touch_start_y: Option<f32>,
}

impl SwipeTracker {
    /// Record a gesture start, replacing any unresolved one.
    #[inline]
    pub fn start(&mut self, y: f32) {
        self.touch_start_y = Some(y);
    }

    /// Consume the recorded start, returning the upward distance travelled.
    ///
    /// Returns `None` when no start was recorded.
    #[inline]
    pub fn finish(&mut self, end_y: f32) -> Option<f32> {
        self.touch_start_y.take().map(|start| start - end_y)
    }

    /// Drop any recorded start without resolving it.
    #[inline]
    pub fn cancel(&mut self) {
        self.touch_start_y = None;
    }

    #[inline]
    #[must_use]
    pub fn pending_start(&self) -> Option<f32> {
        self.touch_start_y
    }
}

/// Click/swipe gate in front of the main content.
///
/// Feed pointer clicks to [`dismiss`](IntroGate::dismiss) and touch events to
/// [`on_gesture_start`](IntroGate::on_gesture_start) /
/// [`on_gesture_end`](IntroGate::on_gesture_end); read
/// [`state`](IntroGate::state) to decide what to render.
#[derive(Debug, Clone, Default)]
pub struct IntroGate {
    config: IntroGateConfig,
    state: IntroGateState,
    tracker: SwipeTracker,
    trigger: Option<DismissTrigger>,
}

impl IntroGate {
    /// Create a gate in the `Showing` state.
    #[must_use]
    pub fn new(config: IntroGateConfig) -> Self {
        Self {
            config,
            state: IntroGateState::Showing,
            tracker: SwipeTracker::default(),
            trigger: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> IntroGateState {
        self.state
    }

    /// The trigger that opened the gate, once revealed.
    #[inline]
    #[must_use]
    pub fn trigger(&self) -> Option<DismissTrigger> {
        self.trigger
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &IntroGateConfig {
        &self.config
    }

    /// Pointer click: dismiss the intro.
    ///
    /// Returns `true` if this call performed the transition.
    pub fn dismiss(&mut self) -> bool {
        self.dismiss_with(DismissTrigger::Click)
    }

    /// Dismiss the intro, recording `trigger`. Idempotent once revealed.
    pub fn dismiss_with(&mut self, trigger: DismissTrigger) -> bool {
        if self.state.is_revealed() {
            return false;
        }
        self.state = IntroGateState::Revealed;
        self.trigger = Some(trigger);
        self.tracker.cancel();
        crate::debug!(?trigger, "intro gate revealed");
        true
    }

    /// Touch start at vertical coordinate `start_y`.
    pub fn on_gesture_start(&mut self, start_y: f32) {
        self.tracker.start(start_y);
    }

    /// Touch end at vertical coordinate `end_y`.
    ///
    /// Dismisses when the finger travelled upward by more than the swipe
    /// threshold since the last start. Returns `true` if this call performed
    /// the transition.
    pub fn on_gesture_end(&mut self, end_y: f32) -> bool {
        let Some(delta) = self.tracker.finish(end_y) else {
            return false;
        };
        if delta > self.config.swipe_threshold_px {
            self.dismiss_with(DismissTrigger::Swipe)
        } else {
            false
        }
    }

    /// Touch cancelled by the platform: forget the pending start.
    pub fn on_gesture_cancel(&mut self) {
        self.tracker.cancel();
    }

    #[inline]
    #[must_use]
    pub fn swipe_tracker(&self) -> &SwipeTracker {
        &self.tracker
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> IntroGate {
        IntroGate::new(IntroGateConfig::default())
    }

    #[test]
    fn starts_showing() {
        let g = gate();
        assert_eq!(g.state(), IntroGateState::Showing);
        assert_eq!(g.trigger(), None);
    }

    #[test]
    fn dismiss_reveals_and_is_idempotent() {
        let mut g = gate();
        assert!(g.dismiss());
        assert_eq!(g.state(), IntroGateState::Revealed);
        assert!(!g.dismiss());
        assert_eq!(g.state(), IntroGateState::Revealed);
        assert_eq!(g.trigger(), Some(DismissTrigger::Click));
    }

    #[test]
    fn long_upward_swipe_reveals() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        assert!(g.on_gesture_end(400.0));
        assert_eq!(g.state(), IntroGateState::Revealed);
        assert_eq!(g.trigger(), Some(DismissTrigger::Swipe));
    }

    #[test]
    fn short_swipe_keeps_showing() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        assert!(!g.on_gesture_end(460.0));
        assert_eq!(g.state(), IntroGateState::Showing);
        assert_eq!(g.swipe_tracker().pending_start(), None);
    }

    #[test]
    fn exactly_threshold_is_not_enough() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        g.on_gesture_end(430.0);
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn downward_swipe_keeps_showing() {
        let mut g = gate();
        g.on_gesture_start(100.0);
        g.on_gesture_end(400.0);
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn end_without_start_is_noop() {
        let mut g = gate();
        assert!(!g.on_gesture_end(300.0));
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn second_start_overwrites_first() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        g.on_gesture_start(480.0);
        assert!(g.on_gesture_end(400.0));
        assert_eq!(g.state(), IntroGateState::Revealed);
    }

    #[test]
    fn overwritten_start_can_fall_short() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        g.on_gesture_start(440.0);
        g.on_gesture_end(400.0);
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn start_is_consumed_by_end() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        g.on_gesture_end(460.0);
        // A second end has nothing to resolve against.
        g.on_gesture_end(0.0);
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn nan_never_dismisses() {
        let mut g = gate();
        g.on_gesture_start(f32::NAN);
        g.on_gesture_end(0.0);
        g.on_gesture_start(500.0);
        g.on_gesture_end(f32::NAN);
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn cancel_drops_pending_start() {
        let mut g = gate();
        g.on_gesture_start(500.0);
        g.on_gesture_cancel();
        g.on_gesture_end(100.0);
        assert_eq!(g.state(), IntroGateState::Showing);
    }

    #[test]
    fn swipe_after_click_keeps_click_trigger() {
        let mut g = gate();
        g.dismiss();
        g.on_gesture_start(500.0);
        assert!(!g.on_gesture_end(100.0));
        assert_eq!(g.trigger(), Some(DismissTrigger::Click));
    }

    #[test]
    fn custom_threshold() {
        let mut g = IntroGate::new(IntroGateConfig::new(10.0).unwrap());
        g.on_gesture_start(100.0);
        g.on_gesture_end(85.0);
        assert!(g.state().is_revealed());
    }

    #[test]
    fn config_rejects_bad_threshold() {
        assert!(IntroGateConfig::new(-1.0).is_err());
        assert!(IntroGateConfig::new(f32::NAN).is_err());
        assert_eq!(
            IntroGateConfig::default().swipe_threshold_px(),
            DEFAULT_SWIPE_THRESHOLD_PX
        );
    }
}
