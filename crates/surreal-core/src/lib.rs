#![forbid(unsafe_code)]

//! Core: decorative particle fields, the intro gate, scroll state, and reveal
//! timing for the Surreal Infinity landing page.
//!
//! Everything here is synchronous and host-driven. Rendering lives elsewhere;
//! these types only produce the values a presentation layer consumes.

pub mod error;
pub mod intro_gate;
pub mod logging;
pub mod particles;
pub mod reveal;
pub mod scroll;

pub use error::ConfigError;
pub use intro_gate::{DismissTrigger, IntroGate, IntroGateConfig, IntroGateState, SwipeTracker};
pub use particles::{
    DustParticle, DustParticleConfig, IceParticle, IceParticleConfig, ParticleColor,
    ParticleField, UniformRange, clamp_count, generate_dust_particles, generate_ice_particles,
};
pub use reveal::{RevealTiming, RevealTrack, RevealTransition};
pub use scroll::{ScrollConfig, ScrollWatcher};

#[cfg(feature = "tracing")]
pub use logging::debug;
