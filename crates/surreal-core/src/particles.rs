#![forbid(unsafe_code)]

//! Decorative particle fields.
//!
//! Two motifs are generated once per mount and never mutated afterwards:
//!
//! - [`IceParticle`]: sharp foreground shards clustered around the hero logo,
//!   each with a drift vector, rotation and trail.
//! - [`DustParticle`]: diffuse background motes spread over the whole field.
//!
//! Both generators take any [`Rng`], so a seeded [`ChaCha8Rng`] reproduces a
//! field exactly. [`ParticleField`] bundles both motifs for one view.
//!
//! # Invariants
//!
//! 1. A generator asked for `count` particles returns exactly `count`.
//! 2. Every sampled field lies inside its configured [`UniformRange`]
//!    (half-open: `min <= v < max`, or `v == min` for a degenerate range).
//! 3. Ice colors alternate by index parity and consume no randomness.
//! 4. Descriptors are independent; none references another.
//!
//! # Failure Modes
//!
//! - Generation cannot fail. Host-supplied counts go through
//!   [`clamp_count`], which maps negative and NaN input to zero.
//! - Invalid ranges are rejected when building a config
//!   ([`UniformRange::new`]), never during sampling.

mod dust;
mod ice;

pub use dust::{DEFAULT_DUST_COUNT, DustParticle, DustParticleConfig, generate_dust_particles};
pub use ice::{
    DEFAULT_ICE_COUNT, IceParticle, IceParticleConfig, ParticleColor, generate_ice_particles,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;

/// Upper bound applied by [`clamp_count`] to host-supplied counts.
pub const MAX_PARTICLES: usize = 4096;

// ---------------------------------------------------------------------------
// Ranges
// ---------------------------------------------------------------------------

/// A validated `[min, max)` interval for uniform sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UniformRange {
    min: f32,
    max: f32,
}

impl UniformRange {
    /// Build a range, rejecting non-finite bounds and `min > max`.
    pub fn new(field: &'static str, min: f32, max: f32) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteRange { field, min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedRange { field, min, max });
        }
        Ok(Self { min, max })
    }

    /// Build `center ± spread / 2`.
    pub fn centered(field: &'static str, center: f32, spread: f32) -> Result<Self, ConfigError> {
        let half = spread.abs() / 2.0;
        Self::new(field, center - half, center + half)
    }

    /// Constant constructor for the built-in defaults.
    pub(crate) const fn from_const(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Whether `value` could have been produced by [`sample`](Self::sample).
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        if self.min == self.max {
            value == self.min
        } else {
            value >= self.min && value < self.max
        }
    }

    /// Draw one value. A degenerate range returns `min` without consuming
    /// randomness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

// ---------------------------------------------------------------------------
// Shared descriptor parts
// ---------------------------------------------------------------------------

/// Placement as a percentage of the container bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionPercent {
    pub x: f32,
    pub y: f32,
}

/// Translation endpoint of a particle's motion, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drift {
    pub dx: f32,
    pub dy: f32,
}

/// Convert a host-supplied count (a JS number) to a particle count.
///
/// Negative values and NaN become `0`, fractional values are floored, and
/// anything above [`MAX_PARTICLES`] (including `+inf`) saturates.
#[must_use]
pub fn clamp_count(raw: f64) -> usize {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    let floored = raw.floor();
    if floored >= MAX_PARTICLES as f64 {
        MAX_PARTICLES
    } else {
        floored as usize
    }
}

// ---------------------------------------------------------------------------
// ParticleField
// ---------------------------------------------------------------------------

/// Both particle motifs for one mounted view.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParticleField {
    ice: Vec<IceParticle>,
    dust: Vec<DustParticle>,
    seed: Option<u64>,
}

impl ParticleField {
    /// Generate both motifs from thread-local entropy.
    #[must_use]
    pub fn generate(ice: &IceParticleConfig, dust: &DustParticleConfig) -> Self {
        let mut rng = rand::thread_rng();
        Self::build(ice, dust, &mut rng, None)
    }

    /// Generate both motifs from a [`ChaCha8Rng`] seeded with `seed`.
    ///
    /// Draw order: all ice particles first, then all dust particles.
    #[must_use]
    pub fn seeded(seed: u64, ice: &IceParticleConfig, dust: &DustParticleConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build(ice, dust, &mut rng, Some(seed))
    }

    fn build<R: Rng + ?Sized>(
        ice: &IceParticleConfig,
        dust: &DustParticleConfig,
        rng: &mut R,
        seed: Option<u64>,
    ) -> Self {
        let field = Self {
            ice: ice.generate(rng),
            dust: dust.generate(rng),
            seed,
        };
        crate::debug!(
            ice = field.ice.len(),
            dust = field.dust.len(),
            seeded = seed.is_some(),
            "particle field generated"
        );
        field
    }

    #[inline]
    #[must_use]
    pub fn ice(&self) -> &[IceParticle] {
        &self.ice
    }

    #[inline]
    #[must_use]
    pub fn dust(&self) -> &[DustParticle] {
        &self.dust
    }

    /// The seed this field was generated from, if any.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::generate(&IceParticleConfig::default(), &DustParticleConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
