//! Runs silhouette generation, every pass, and the final mask clip.

use abyss_sprite_core::{Canvas, Mask, Palette, RandomSource, SpriteError, Xorshift64};
use tracing::debug;

use crate::params::MeteoriteParams;
use crate::pass::{Pass, Scene};
use crate::passes::default_passes;
use crate::silhouette::Silhouette;

/// A finished sprite plus the geometry it was clipped to.
#[derive(Debug, Clone)]
pub struct Sprite {
    canvas: Canvas,
    mask: Mask,
    silhouette: Silhouette,
}

impl Sprite {
    /// The clipped output pixels.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn silhouette(&self) -> &Silhouette {
        &self.silhouette
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// The abyss meteorite generator.
///
/// Owns the drawing constants, the palette and the ordered pass list. One
/// [`render`](Meteorite::render) call builds a fresh canvas, lends it to each
/// pass in turn, and clips the result to the silhouette.
pub struct Meteorite {
    params: MeteoriteParams,
    palette: Palette,
    passes: Vec<Box<dyn Pass>>,
}

impl Default for Meteorite {
    fn default() -> Self {
        Self::new(MeteoriteParams::default(), Palette::abyss())
    }
}

impl Meteorite {
    /// Creates a generator running the standard pass list.
    pub fn new(params: MeteoriteParams, palette: Palette) -> Self {
        Self::with_passes(params, palette, default_passes())
    }

    /// Creates a generator running `passes` in the given order.
    pub fn with_passes(
        params: MeteoriteParams,
        palette: Palette,
        passes: Vec<Box<dyn Pass>>,
    ) -> Self {
        Self {
            params,
            palette,
            passes,
        }
    }

    pub fn params(&self) -> &MeteoriteParams {
        &self.params
    }

    /// Pass names in run order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Renders one sprite, drawing all randomness from `rng`.
    ///
    /// Returns `SpriteError::InvalidDimensions` if the configured canvas is empty.
    pub fn render(&self, rng: &mut dyn RandomSource) -> Result<Sprite, SpriteError> {
        let (w, h) = (self.params.width, self.params.height);
        let silhouette = Silhouette::generate(&self.params, rng);
        let mask = silhouette.mask(w, h)?;
        debug!(
            vertices = silhouette.vertices().len(),
            inside = mask.count_inside(),
            "silhouette ready"
        );

        let mut layer = Canvas::new(w, h)?;
        let scene = Scene {
            params: &self.params,
            palette: &self.palette,
            silhouette: &silhouette,
        };
        for pass in &self.passes {
            pass.render(&scene, &mut layer, rng);
            debug!(pass = pass.name(), opaque = layer.count_opaque(), "pass done");
        }

        let canvas = layer.masked(&mask)?;
        debug!(opaque = canvas.count_opaque(), "clipped to silhouette");
        Ok(Sprite {
            canvas,
            mask,
            silhouette,
        })
    }

    /// Renders with a fresh [`Xorshift64`] seeded by `seed`.
    pub fn render_seeded(&self, seed: u64) -> Result<Sprite, SpriteError> {
        self.render(&mut Xorshift64::new(seed))
    }
}
