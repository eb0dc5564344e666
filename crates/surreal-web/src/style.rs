#![forbid(unsafe_code)]

//! Inline-style mapping for particle descriptors.
//!
//! Property names match the page stylesheet: ice particles drive the
//! `ice-particle` keyframes through custom properties, dust particles reuse
//! the `drift` keyframes.

use serde::Serialize;
use surreal_core::{DustParticle, IceParticle, ParticleColor, ParticleField};

/// One `(property, value)` declaration.
pub type StyleDecl = (&'static str, String);

/// CSS color for an ice particle.
#[must_use]
pub const fn color_css(color: ParticleColor) -> &'static str {
    match color {
        ParticleColor::Primary => "oklch(0.75 0.18 190)",
        ParticleColor::Secondary => "oklch(0.6 0.2 300)",
    }
}

#[must_use]
pub fn ice_style(p: &IceParticle) -> Vec<StyleDecl> {
    let color = color_css(p.color);
    vec![
        ("width", format!("{}px", p.size_px)),
        ("height", format!("{}px", p.size_px)),
        ("left", format!("{}%", p.position.x)),
        ("top", format!("{}%", p.position.y)),
        ("background-color", color.to_owned()),
        ("--particle-color", color.to_owned()),
        ("--trail-length", format!("{}px", p.trail_length_px)),
        ("--tw-translate-x", format!("{}px", p.drift.dx)),
        ("--tw-translate-y", format!("{}px", p.drift.dy)),
        ("--tw-rotate", format!("{}deg", p.rotation_deg)),
        ("--ice-delay", format!("{}s", p.delay_secs)),
        ("--ice-duration", format!("{}s", p.duration_secs)),
    ]
}

#[must_use]
pub fn dust_style(p: &DustParticle) -> Vec<StyleDecl> {
    vec![
        ("width", format!("{}px", p.size_px)),
        ("height", format!("{}px", p.size_px)),
        ("left", format!("{}%", p.position.x)),
        ("top", format!("{}%", p.position.y)),
        ("opacity", p.opacity.to_string()),
        ("animation", format!("drift {}s linear infinite", p.duration_secs)),
        ("animation-delay", format!("{}s", p.delay_secs)),
    ]
}

/// Join declarations into a `style` attribute value.
#[must_use]
pub fn to_inline_css(decls: &[StyleDecl]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{prop}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline styles for every particle of a field, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleStyles {
    pub ice: Vec<String>,
    pub dust: Vec<String>,
}

impl ParticleStyles {
    #[must_use]
    pub fn from_field(field: &ParticleField) -> Self {
        Self {
            ice: field
                .ice()
                .iter()
                .map(|p| to_inline_css(&ice_style(p)))
                .collect(),
            dust: field
                .dust()
                .iter()
                .map(|p| to_inline_css(&dust_style(p)))
                .collect(),
        }
    }
}
