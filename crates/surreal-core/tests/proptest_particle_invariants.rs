//! Property-based invariant tests for particle generation.
//!
//! 1. Ice and dust generators return exactly `count` descriptors.
//! 2. Every ice field lies in its documented range.
//! 3. Ice colors alternate by index parity.
//! 4. Every dust field lies in its documented range.
//! 5. Seeded fields are reproducible.
//! 6. `clamp_count` never exceeds the maximum and never panics.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use surreal_core::particles::MAX_PARTICLES;
use surreal_core::{
    DustParticleConfig, IceParticleConfig, ParticleColor, ParticleField, clamp_count,
    generate_dust_particles, generate_ice_particles,
};

// ═════════════════════════════════════════════════════════════════════════
// 1. Cardinality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ice_count_is_exact(count in 0usize..200) {
        prop_assert_eq!(generate_ice_particles(count).len(), count);
    }

    #[test]
    fn dust_count_is_exact(count in 0usize..200) {
        prop_assert_eq!(generate_dust_particles(count).len(), count);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–3. Ice ranges and colors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ice_fields_in_range(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = IceParticleConfig::default().generate(&mut rng);
        for p in &particles {
            prop_assert!((2.0..=8.0).contains(&p.size_px), "size {}", p.size_px);
            prop_assert!((32.5..=67.5).contains(&p.position.x), "x {}", p.position.x);
            prop_assert!((32.5..=67.5).contains(&p.position.y), "y {}", p.position.y);
            prop_assert!((-125.0..=125.0).contains(&p.drift.dx), "dx {}", p.drift.dx);
            prop_assert!((-125.0..=125.0).contains(&p.drift.dy), "dy {}", p.drift.dy);
            prop_assert!((0.0..5.0).contains(&p.delay_secs), "delay {}", p.delay_secs);
            prop_assert!((4.0..7.0).contains(&p.duration_secs), "duration {}", p.duration_secs);
            prop_assert!((0.0..360.0).contains(&p.rotation_deg), "rotation {}", p.rotation_deg);
            prop_assert!((25.0..50.0).contains(&p.trail_length_px), "trail {}", p.trail_length_px);
        }
    }

    #[test]
    fn ice_colors_alternate(seed in any::<u64>(), count in 0usize..64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = IceParticleConfig::default().with_count(count).generate(&mut rng);
        for (i, p) in particles.iter().enumerate() {
            let expected = if i % 2 == 0 { ParticleColor::Primary } else { ParticleColor::Secondary };
            prop_assert_eq!(p.color, expected);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Dust ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dust_fields_in_range(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = DustParticleConfig::default().generate(&mut rng);
        for p in &particles {
            prop_assert!((1.0..=4.0).contains(&p.size_px), "size {}", p.size_px);
            prop_assert!((0.0..=0.5).contains(&p.opacity), "opacity {}", p.opacity);
            prop_assert!((0.0..=100.0).contains(&p.position.x), "x {}", p.position.x);
            prop_assert!((0.0..=100.0).contains(&p.position.y), "y {}", p.position.y);
            prop_assert!((20.0..40.0).contains(&p.duration_secs), "duration {}", p.duration_secs);
            prop_assert!((0.0..20.0).contains(&p.delay_secs), "delay {}", p.delay_secs);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Reproducibility
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seeded_field_reproducible(seed in any::<u64>()) {
        let ice = IceParticleConfig::default();
        let dust = DustParticleConfig::default();
        prop_assert_eq!(
            ParticleField::seeded(seed, &ice, &dust),
            ParticleField::seeded(seed, &ice, &dust)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Host count clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_count_bounded(raw in any::<f64>()) {
        let n = clamp_count(raw);
        prop_assert!(n <= MAX_PARTICLES);
        if raw.is_nan() || raw <= 0.0 {
            prop_assert_eq!(n, 0);
        }
    }

    #[test]
    fn clamp_count_floors_in_range(whole in 0usize..MAX_PARTICLES, frac in 0.0f64..0.999) {
        prop_assert_eq!(clamp_count(whole as f64 + frac), whole);
    }
}
