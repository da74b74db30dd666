//! Dotted streaks of energy leaking through the crust.

use abyss_sprite_core::geometry::{polar, trunc_to_pixel};
use abyss_sprite_core::{Canvas, RandomSource};
use glam::DVec2;
use std::f64::consts::TAU;

use crate::pass::{Pass, Scene};

/// Draws `crack_count` jittered radial streaks starting near the center.
///
/// Every step draws fresh jitter, but only even steps are plotted, so cracks
/// read as chunky dots rather than continuous lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cracks;

impl Pass for Cracks {
    fn name(&self) -> &'static str {
        "cracks"
    }

    fn render(&self, scene: &Scene<'_>, canvas: &mut Canvas, rng: &mut dyn RandomSource) {
        let params = scene.params;
        let core = scene.palette.core;
        let center = params.center();
        let spread = params.crack_origin_spread;
        let jitter = params.crack_jitter;
        let [len_min, len_max] = params.crack_length;
        let steps = params.crack_steps.max(1);

        for _ in 0..params.crack_count {
            let angle = rng.next_f64() * TAU;
            let length = params.radius * rng.next_range_inclusive(len_min, len_max);
            let origin = center
                + DVec2::new(
                    rng.next_int(-spread, spread) as f64,
                    rng.next_int(-spread, spread) as f64,
                );
            let step = length / steps as f64;

            for i in 0..steps {
                let jx = rng.next_int(-jitter, jitter) as f64;
                let jy = rng.next_int(-jitter, jitter) as f64;
                if i % 2 != 0 {
                    continue;
                }
                let along = polar(origin, step * i as f64, angle);
                let p = trunc_to_pixel(along + DVec2::new(jx, jy));
                canvas.put(p.x, p.y, core.bright);
                if rng.chance(params.crack_flare_chance) {
                    canvas.put(p.x + 1, p.y, core.intense);
                }
            }
        }
    }
}
