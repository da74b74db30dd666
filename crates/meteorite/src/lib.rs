#![deny(unsafe_code)]
//! Abyss meteorite sprite generator.
//!
//! Builds a chipped hexagonal rock silhouette, then runs five passes over one
//! shared canvas: a chaotic fire core in 2×2 blocks, a broken dark shell,
//! bright dotted cracks, dark craters, and a neon rim glow. The drawn layer is
//! clipped to the silhouette and, with the `png` feature, written to disk.
//!
//! All randomness flows through an explicit
//! [`RandomSource`](abyss_sprite_core::RandomSource), so a seeded run is
//! reproducible pixel for pixel.

pub mod params;
pub mod pass;
pub mod passes;
pub mod pipeline;
pub mod silhouette;

#[cfg(feature = "png")]
pub mod snapshot;

pub use params::MeteoriteParams;
pub use pass::{Pass, Scene};
pub use pipeline::{Meteorite, Sprite};
pub use silhouette::Silhouette;

/// Where the CLI writes the sprite, relative to the working directory.
pub const OUTPUT_PATH: &str = "abyss_meteorite_6.png";
