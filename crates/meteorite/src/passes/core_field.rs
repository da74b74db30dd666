//! Chaotic fire field filling the rock interior in chunky blocks.
//!
//! Each block blends a fixed trigonometric pattern with a fresh random draw,
//! then snaps the result to one of five flat colors. There is no interpolation
//! between blocks; the banding is the look.

use abyss_sprite_core::{Canvas, CoreBand, RandomSource};

use crate::pass::{Pass, Scene};

/// Fills every block within `core_cutoff * radius` of the center.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreField;

/// Smooth interference term in [-1, 1] at block origin `(x, y)`.
pub fn noise(x: f64, y: f64) -> f64 {
    ((0.3 * x + 0.2 * y).sin() + (0.2 * x - 0.3 * y).cos()) * 0.5
}

/// Radial ripple in [0, 1] at polar position `(angle, dist)`.
pub fn pulse(angle: f64, dist: f64) -> f64 {
    (3.0 * angle + 0.1 * dist).sin().abs()
}

/// Mean of noise, pulse and a uniform sample in [0, 1).
pub fn chaos(noise: f64, pulse: f64, sample: f64) -> f64 {
    (noise + pulse + sample) / 3.0
}

impl Pass for CoreField {
    fn name(&self) -> &'static str {
        "core"
    }

    fn render(&self, scene: &Scene<'_>, canvas: &mut Canvas, rng: &mut dyn RandomSource) {
        let params = scene.params;
        let center = params.center();
        let cutoff = params.radius * params.core_cutoff;
        let step = params.block_size.max(1);
        let block = step as i32;

        for y in (0..canvas.height()).step_by(step) {
            for x in (0..canvas.width()).step_by(step) {
                let (xf, yf) = (x as f64, y as f64);
                let dx = xf - center.x;
                let dy = yf - center.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist >= cutoff {
                    continue;
                }
                let angle = dy.atan2(dx);
                let value = chaos(noise(xf, yf), pulse(angle, dist), rng.next_f64());
                let color = scene.palette.core_color(CoreBand::classify(value));
                canvas.fill_rect(x as i32, y as i32, block, block, color);
            }
        }
    }
}
