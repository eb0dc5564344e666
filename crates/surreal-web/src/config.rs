#![forbid(unsafe_code)]

//! Host-supplied configuration.
//!
//! Every field is optional in JSON; missing fields take the page's built-in
//! values. Counts arrive as JS numbers and are clamped, thresholds and
//! timings are validated by the core.

use serde::{Deserialize, Serialize};
use surreal_core::intro_gate::DEFAULT_SWIPE_THRESHOLD_PX;
use surreal_core::particles::{DEFAULT_DUST_COUNT, DEFAULT_ICE_COUNT};
use surreal_core::scroll::DEFAULT_SCROLL_THRESHOLD_PX;
use surreal_core::{
    DustParticleConfig, IceParticleConfig, IntroGateConfig, RevealTiming, ScrollConfig,
    clamp_count,
};

use crate::LandingError;

/// Reveal timing in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub intro_exit_secs: f32,
    pub content_delay_secs: f32,
    pub content_fade_secs: f32,
    pub intro_exit_scale: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let timing = RevealTiming::default();
        Self {
            intro_exit_secs: timing.intro_exit.as_secs_f32(),
            content_delay_secs: timing.content_delay.as_secs_f32(),
            content_fade_secs: timing.content_fade.as_secs_f32(),
            intro_exit_scale: timing.intro_exit_scale,
        }
    }
}

/// Landing session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Default: 25
    pub ice_count: f64,
    /// Default: 30
    pub dust_count: f64,
    /// Default: 70
    pub swipe_threshold_px: f32,
    /// Default: 50
    pub scroll_threshold_px: f32,
    /// Fixed seed for reproducible particle fields (visual tests, screenshots).
    pub seed: Option<u64>,
    pub reveal: RevealConfig,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            ice_count: DEFAULT_ICE_COUNT as f64,
            dust_count: DEFAULT_DUST_COUNT as f64,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            seed: None,
            reveal: RevealConfig::default(),
        }
    }
}

/// Core configs built from a validated [`LandingConfig`].
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub ice: IceParticleConfig,
    pub dust: DustParticleConfig,
    pub gate: IntroGateConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealTiming,
    pub seed: Option<u64>,
}

impl LandingConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, LandingError> {
        let config: Self = serde_json::from_str(s)?;
        config.resolve()?;
        Ok(config)
    }

    /// Validate and convert into core configs.
    pub fn resolve(&self) -> Result<ResolvedConfig, LandingError> {
        Ok(ResolvedConfig {
            ice: IceParticleConfig::default().with_count(clamp_count(self.ice_count)),
            dust: DustParticleConfig::default().with_count(clamp_count(self.dust_count)),
            gate: IntroGateConfig::new(self.swipe_threshold_px)?,
            scroll: ScrollConfig::new(self.scroll_threshold_px)?,
            reveal: RevealTiming::from_secs(
                self.reveal.intro_exit_secs,
                self.reveal.content_delay_secs,
                self.reveal.content_fade_secs,
                self.reveal.intro_exit_scale,
            )?,
            seed: self.seed,
        })
    }
}
