//! Broken dark crust stippled inward from each silhouette vertex.

use abyss_sprite_core::geometry::{radial_offset, trunc_to_pixel};
use abyss_sprite_core::{Canvas, RandomSource};

use crate::pass::{Pass, Scene};

/// Walks a random number of steps inward from every vertex, plotting most of
/// them in a shell tone. Skipped steps let the core show through as cracks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell;

impl Pass for Shell {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn render(&self, scene: &Scene<'_>, canvas: &mut Canvas, rng: &mut dyn RandomSource) {
        let params = scene.params;
        let tones = scene.palette.shell;
        let center = scene.silhouette.center();
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        let [min_thickness, max_thickness] = params.shell_thickness;

        for vertex in scene.silhouette.vertices() {
            let thickness = rng.next_int(min_thickness, max_thickness);
            for t in 0..thickness {
                let p = radial_offset(center, vertex.as_dvec2(), -(t as f64));
                if !(0.0..w).contains(&p.x) || !(0.0..h).contains(&p.y) {
                    continue;
                }
                if !rng.chance(params.shell_coverage) {
                    continue;
                }
                let color = if rng.chance(params.shell_dark_share) {
                    tones.dark
                } else {
                    tones.mid
                };
                let px = trunc_to_pixel(p);
                canvas.put(px.x, px.y, color);
            }
        }
    }
}
