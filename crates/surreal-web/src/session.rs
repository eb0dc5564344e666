#![forbid(unsafe_code)]

//! One mounted landing view.
//!
//! A [`LandingSession`] is created when the page mounts and dropped when it
//! unmounts. It owns the particle field (generated once), the intro gate, the
//! scroll watcher and, after dismissal, the reveal transition.
//!
//! The reveal transition starts exactly once, on the `Showing -> Revealed`
//! edge, and is timed from the host clock at that moment.

use core::time::Duration;

use serde::Serialize;
use surreal_core::{
    DismissTrigger, IntroGate, IntroGateState, ParticleField, RevealTiming, RevealTransition,
    ScrollWatcher,
};

use crate::config::LandingConfig;
use crate::event::LandingEvent;
use crate::style::ParticleStyles;
use crate::{DeterministicClock, LandingError};

/// Render-facing view of the session, serialized for the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingSnapshot {
    pub state: IntroGateState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<DismissTrigger>,
    /// Whether the intro layer is still in the DOM (showing or fading out).
    pub intro_mounted: bool,
    pub intro_opacity: f32,
    pub intro_scale: f32,
    pub content_opacity: f32,
    pub scrolled: bool,
    pub now_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_at_ms: Option<u64>,
}

impl LandingSnapshot {
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Host-driven landing page state.
#[derive(Debug, Clone)]
pub struct LandingSession {
    clock: DeterministicClock,
    gate: IntroGate,
    scroll: ScrollWatcher,
    timing: RevealTiming,
    reveal: Option<RevealTransition>,
    revealed_at: Option<Duration>,
    field: ParticleField,
}

impl LandingSession {
    /// Mount a session, generating the particle field.
    pub fn new(config: &LandingConfig) -> Result<Self, LandingError> {
        let resolved = config.resolve()?;
        let field = match resolved.seed {
            Some(seed) => ParticleField::seeded(seed, &resolved.ice, &resolved.dust),
            None => ParticleField::generate(&resolved.ice, &resolved.dust),
        };
        surreal_core::debug!(
            ice = field.ice().len(),
            dust = field.dust().len(),
            "landing session mounted"
        );
        Ok(Self {
            clock: DeterministicClock::new(),
            gate: IntroGate::new(resolved.gate),
            scroll: ScrollWatcher::new(resolved.scroll),
            timing: resolved.reveal,
            reveal: None,
            revealed_at: None,
            field,
        })
    }

    /// Mount with `config`, overriding its particle seed with `seed`.
    pub fn seeded(config: &LandingConfig, seed: u64) -> Result<Self, LandingError> {
        Self::new(&LandingConfig {
            seed: Some(seed),
            ..config.clone()
        })
    }

    /// Apply one host event.
    ///
    /// Returns `true` when render-facing state changed (gate opened or the
    /// scrolled flag flipped).
    pub fn handle_event(&mut self, event: LandingEvent) -> bool {
        match event {
            LandingEvent::Click => {
                let opened = self.gate.dismiss();
                self.on_gate_result(opened)
            }
            LandingEvent::TouchStart { y } => {
                self.gate.on_gesture_start(y);
                false
            }
            LandingEvent::TouchEnd { y } => {
                let opened = self.gate.on_gesture_end(y);
                self.on_gate_result(opened)
            }
            LandingEvent::TouchCancel => {
                self.gate.on_gesture_cancel();
                false
            }
            LandingEvent::Scroll { y } => {
                let before = self.scroll.is_scrolled();
                before != self.scroll.on_scroll(y)
            }
        }
    }

    /// Decode and apply a JSON event.
    pub fn handle_event_json(&mut self, json: &str) -> Result<bool, LandingError> {
        let event = LandingEvent::from_json_str(json)?;
        Ok(self.handle_event(event))
    }

    fn on_gate_result(&mut self, opened: bool) -> bool {
        if opened && self.reveal.is_none() {
            self.reveal = Some(RevealTransition::new(self.timing));
            self.revealed_at = Some(self.clock.now());
        }
        opened
    }

    /// Advance host time by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.clock.advance(dt);
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.tick(dt);
        }
    }

    #[must_use]
    pub fn state(&self) -> IntroGateState {
        self.gate.state()
    }

    #[must_use]
    pub fn gate(&self) -> &IntroGate {
        &self.gate
    }

    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&RevealTransition> {
        self.reveal.as_ref()
    }

    /// Whether the intro layer should still be rendered.
    #[must_use]
    pub fn intro_mounted(&self) -> bool {
        match &self.reveal {
            Some(reveal) => !reveal.intro_exit_complete(),
            None => true,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> LandingSnapshot {
        let (intro_opacity, intro_scale, content_opacity) = match &self.reveal {
            Some(r) => (r.intro_opacity(), r.intro_scale(), r.content_opacity()),
            None => (1.0, 1.0, 0.0),
        };
        LandingSnapshot {
            state: self.gate.state(),
            trigger: self.gate.trigger(),
            intro_mounted: self.intro_mounted(),
            intro_opacity,
            intro_scale,
            content_opacity,
            scrolled: self.scroll.is_scrolled(),
            now_ms: duration_ms(self.clock.now()),
            revealed_at_ms: self.revealed_at.map(duration_ms),
        }
    }

    /// Particle field as JSON.
    pub fn field_json(&self) -> Result<String, LandingError> {
        Ok(serde_json::to_string(&self.field)?)
    }

    /// Inline styles for every particle as JSON.
    pub fn styles_json(&self) -> Result<String, LandingError> {
        Ok(serde_json::to_string(&ParticleStyles::from_field(
            &self.field,
        ))?)
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis().min(u128::from(u64::MAX)) as u64
}
