#![deny(unsafe_code)]
//! Core types for the abyss-sprite pixel-art generator.
//!
//! Provides the `Canvas` pixel grid, the `Mask` clip grid, the `Rgba` color
//! type, the fixed `Palette`, integer rasterization primitives, radial
//! geometry helpers, the `RandomSource` trait with its `Xorshift64`
//! implementation, and the `Seed` run descriptor.

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod palette;
pub mod prng;
pub mod raster;
pub mod seed;

pub use canvas::Canvas;
pub use color::Rgba;
pub use error::SpriteError;
pub use mask::Mask;
pub use palette::{CoreBand, Palette};
pub use prng::{RandomSource, Xorshift64};
pub use seed::Seed;
