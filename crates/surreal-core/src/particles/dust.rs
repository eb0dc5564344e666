#![forbid(unsafe_code)]

//! Dust particles: faint motes drifting across the whole background.

use rand::Rng;

use super::{PositionPercent, UniformRange};

/// Number of dust particles rendered across the background.
pub const DEFAULT_DUST_COUNT: usize = 30;

/// One dust particle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DustParticle {
    pub size_px: f32,
    pub position: PositionPercent,
    pub opacity: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
}

/// Sampling ranges for dust particles.
#[derive(Debug, Clone, PartialEq)]
pub struct DustParticleConfig {
    /// Default: 30
    pub count: usize,
    /// Default: [1, 4)
    pub size_px: UniformRange,
    /// Full field on both axes.
    /// Default: [0, 100)
    pub position: UniformRange,
    /// Default: [0, 0.5)
    pub opacity: UniformRange,
    /// Default: [0, 20)
    pub delay_secs: UniformRange,
    /// Default: [20, 40)
    pub duration_secs: UniformRange,
}

impl Default for DustParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_DUST_COUNT,
            size_px: UniformRange::from_const(1.0, 4.0),
            position: UniformRange::from_const(0.0, 100.0),
            opacity: UniformRange::from_const(0.0, 0.5),
            delay_secs: UniformRange::from_const(0.0, 20.0),
            duration_secs: UniformRange::from_const(20.0, 40.0),
        }
    }
}

impl DustParticleConfig {
    /// Replace the particle count (builder).
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Generate `self.count` particles.
    ///
    /// Per-particle draw order: size, x, y, opacity, duration, delay.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<DustParticle> {
        (0..self.count)
            .map(|_| DustParticle {
                size_px: self.size_px.sample(rng),
                position: PositionPercent {
                    x: self.position.sample(rng),
                    y: self.position.sample(rng),
                },
                opacity: self.opacity.sample(rng),
                duration_secs: self.duration_secs.sample(rng),
                delay_secs: self.delay_secs.sample(rng),
            })
            .collect()
    }
}

/// Generate `count` dust particles with the default ranges.
#[must_use]
pub fn generate_dust_particles(count: usize) -> Vec<DustParticle> {
    DustParticleConfig::default()
        .with_count(count)
        .generate(&mut rand::thread_rng())
}
