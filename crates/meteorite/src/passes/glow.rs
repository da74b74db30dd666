//! Neon rim light: concentric outline strokes around the silhouette.

use abyss_sprite_core::raster::polygon_outline;
use abyss_sprite_core::{Canvas, RandomSource};

use crate::pass::{Pass, Scene};

/// Strokes one closed outline per entry of `glow_offsets`, in order.
///
/// Offset 0 is the silhouette itself in the bright neon tone; every other
/// offset shrinks the outline along each vertex's radial direction and uses
/// the dimmer edge tone. Later rings overwrite earlier ones where they touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeGlow;

impl Pass for EdgeGlow {
    fn name(&self) -> &'static str {
        "glow"
    }

    fn render(&self, scene: &Scene<'_>, canvas: &mut Canvas, _rng: &mut dyn RandomSource) {
        let neon = scene.palette.neon;
        for &offset in &scene.params.glow_offsets {
            let ring = scene.silhouette.offset_ring(offset);
            let color = if offset == 0 { neon.bright } else { neon.edge };
            canvas.plot_all(&polygon_outline(&ring), color);
        }
    }
}
