#![forbid(unsafe_code)]

//! Ice particles: sharp shards clustered around the hero logo.

use rand::Rng;

use super::{Drift, PositionPercent, UniformRange};

/// Number of ice particles rendered around the hero logo.
pub const DEFAULT_ICE_COUNT: usize = 25;

/// Palette token for an ice particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParticleColor {
    /// Turquoise.
    Primary,
    /// Violet.
    Secondary,
}

impl ParticleColor {
    /// Even indices are [`Primary`](Self::Primary), odd are
    /// [`Secondary`](Self::Secondary).
    #[inline]
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Primary
        } else {
            Self::Secondary
        }
    }
}

/// One ice particle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IceParticle {
    pub size_px: f32,
    pub color: ParticleColor,
    pub position: PositionPercent,
    pub drift: Drift,
    pub trail_length_px: f32,
    pub rotation_deg: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
}

/// Sampling ranges for ice particles.
#[derive(Debug, Clone, PartialEq)]
pub struct IceParticleConfig {
    /// Number of particles to generate.
    /// Default: 25
    pub count: usize,
    /// Diameter in pixels.
    /// Default: [2, 8)
    pub size_px: UniformRange,
    /// Horizontal placement in percent.
    /// Default: 50 ± 17.5
    pub position_x: UniformRange,
    /// Vertical placement in percent.
    /// Default: 50 ± 17.5
    pub position_y: UniformRange,
    /// Drift endpoint on each axis in pixels.
    /// Default: [-125, 125)
    pub drift: UniformRange,
    /// Default: [0, 5)
    pub delay_secs: UniformRange,
    /// Default: [4, 7)
    pub duration_secs: UniformRange,
    /// Default: [0, 360)
    pub rotation_deg: UniformRange,
    /// Default: [25, 50)
    pub trail_length_px: UniformRange,
}

impl Default for IceParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_ICE_COUNT,
            size_px: UniformRange::from_const(2.0, 8.0),
            position_x: UniformRange::from_const(32.5, 67.5),
            position_y: UniformRange::from_const(32.5, 67.5),
            drift: UniformRange::from_const(-125.0, 125.0),
            delay_secs: UniformRange::from_const(0.0, 5.0),
            duration_secs: UniformRange::from_const(4.0, 7.0),
            rotation_deg: UniformRange::from_const(0.0, 360.0),
            trail_length_px: UniformRange::from_const(25.0, 50.0),
        }
    }
}

impl IceParticleConfig {
    /// Replace the particle count (builder).
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Generate `self.count` particles.
    ///
    /// Per-particle draw order: size, x, y, dx, dy, delay, duration,
    /// rotation, trail length.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<IceParticle> {
        (0..self.count)
            .map(|i| IceParticle {
                size_px: self.size_px.sample(rng),
                color: ParticleColor::for_index(i),
                position: PositionPercent {
                    x: self.position_x.sample(rng),
                    y: self.position_y.sample(rng),
                },
                drift: Drift {
                    dx: self.drift.sample(rng),
                    dy: self.drift.sample(rng),
                },
                delay_secs: self.delay_secs.sample(rng),
                duration_secs: self.duration_secs.sample(rng),
                rotation_deg: self.rotation_deg.sample(rng),
                trail_length_px: self.trail_length_px.sample(rng),
            })
            .collect()
    }
}

/// Generate `count` ice particles with the default ranges.
#[must_use]
pub fn generate_ice_particles(count: usize) -> Vec<IceParticle> {
    IceParticleConfig::default()
        .with_count(count)
        .generate(&mut rand::thread_rng())
}
