//! Impact craters: dark discs with a thin shell-tone rim.

use abyss_sprite_core::raster::{disc, disc_rim};
use abyss_sprite_core::{Canvas, RandomSource};
use glam::IVec2;

use crate::pass::{Pass, Scene};

/// Stamps `crater_count` craters at random positions away from the edges.
/// Craters may overlap each other and anything drawn before them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Craters;

impl Pass for Craters {
    fn name(&self) -> &'static str {
        "craters"
    }

    fn render(&self, scene: &Scene<'_>, canvas: &mut Canvas, rng: &mut dyn RandomSource) {
        let params = scene.params;
        let [pos_min, pos_max] = params.crater_position;
        let [r_min, r_max] = params.crater_radius;

        for _ in 0..params.crater_count {
            let x = rng.next_int(pos_min, pos_max) as i32;
            let y = rng.next_int(pos_min, pos_max) as i32;
            let r = rng.next_int(r_min, r_max) as i32;
            let center = IVec2::new(x, y);
            canvas.plot_all(&disc(center, r), scene.palette.core.black);
            canvas.plot_all(&disc_rim(center, r), scene.palette.shell.dark);
        }
    }
}
