//! The `Pass` trait every drawing stage implements.
//!
//! The trait is object-safe so the pipeline can hold its stages as
//! `Box<dyn Pass>` and run them in order against one canvas.

use abyss_sprite_core::{Canvas, Palette, RandomSource};

use crate::params::MeteoriteParams;
use crate::silhouette::Silhouette;

/// Read-only state shared by every pass of one run.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub params: &'a MeteoriteParams,
    pub palette: &'a Palette,
    pub silhouette: &'a Silhouette,
}

/// One drawing stage of the sprite pipeline.
///
/// A pass only ever overwrites pixels; whatever a later pass draws wins.
pub trait Pass {
    /// Short stable name, used in log events.
    fn name(&self) -> &'static str;

    /// Draws this stage onto `canvas`, drawing all randomness from `rng`.
    fn render(&self, scene: &Scene<'_>, canvas: &mut Canvas, rng: &mut dyn RandomSource);
}
