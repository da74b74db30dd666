//! Drawing constants for the abyss meteorite.
//!
//! Every number the passes use lives here. [`MeteoriteParams::default`] is the
//! only configuration production runs use; tests build variants to probe edge
//! cases.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Canvas side length in pixels.
const DEFAULT_SIZE: usize = 128;
/// Base silhouette radius in pixels.
const DEFAULT_RADIUS: f64 = 48.0;
/// Silhouette vertex count.
const DEFAULT_VERTEX_COUNT: usize = 24;

/// Inclusive integer range, serialized as `[min, max]`.
pub type IntRange = [i64; 2];

/// Tunable constants for the silhouette and every render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteoriteParams {
    pub width: usize,
    pub height: usize,
    /// Shared center of every stage, in pixels.
    pub center: [f64; 2],
    /// Base silhouette radius.
    pub radius: f64,

    /// Silhouette vertex count.
    pub vertex_count: usize,
    /// Number of lobes in the hexagonal modulation.
    pub hex_lobes: f64,
    /// Hex multiplier floor; the multiplier spans `[hex_base, hex_base + hex_amplitude]`.
    pub hex_base: f64,
    pub hex_amplitude: f64,
    /// Random jaggedness multiplier range `[min, max]`, both ends reachable.
    pub jaggedness: [f64; 2],

    /// Core blocks are painted while their distance is below `core_cutoff * radius`.
    pub core_cutoff: f64,
    /// Side length of a core block.
    pub block_size: usize,

    /// Shell walk length per vertex.
    pub shell_thickness: IntRange,
    /// Probability that a shell step is plotted.
    pub shell_coverage: f64,
    /// Probability that a plotted shell pixel uses the darker tone.
    pub shell_dark_share: f64,

    pub crack_count: usize,
    pub crack_steps: usize,
    /// Crack length as a multiple of `radius`, `[min, max]`.
    pub crack_length: [f64; 2],
    /// Max crack origin offset from the center, per axis.
    pub crack_origin_spread: i64,
    /// Max per-step jitter, per axis.
    pub crack_jitter: i64,
    /// Probability of the extra intense pixel beside a crack dot.
    pub crack_flare_chance: f64,

    pub crater_count: usize,
    /// Crater center range on both axes.
    pub crater_position: IntRange,
    pub crater_radius: IntRange,

    /// Radial offsets of the glow rings, drawn in this order.
    pub glow_offsets: Vec<i32>,
}

impl Default for MeteoriteParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            center: [64.0, 64.0],
            radius: DEFAULT_RADIUS,
            vertex_count: DEFAULT_VERTEX_COUNT,
            hex_lobes: 6.0,
            hex_base: 0.85,
            hex_amplitude: 0.15,
            jaggedness: [0.65, 1.15],
            core_cutoff: 0.95,
            block_size: 2,
            shell_thickness: [4, 8],
            shell_coverage: 0.7,
            shell_dark_share: 0.7,
            crack_count: 15,
            crack_steps: 12,
            crack_length: [0.6, 1.2],
            crack_origin_spread: 15,
            crack_jitter: 3,
            crack_flare_chance: 0.5,
            crater_count: 8,
            crater_position: [30, 98],
            crater_radius: [3, 8],
            glow_offsets: vec![0, -1, -2],
        }
    }
}

impl MeteoriteParams {
    pub fn center(&self) -> DVec2 {
        DVec2::from_array(self.center)
    }

    /// Closest and farthest a silhouette vertex can sit from the center,
    /// before rounding to pixels.
    pub fn vertex_radius_bounds(&self) -> (f64, f64) {
        let [jag_min, jag_max] = self.jaggedness;
        (
            self.radius * self.hex_base * jag_min,
            self.radius * (self.hex_base + self.hex_amplitude) * jag_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_centered_128_sprite() {
        let p = MeteoriteParams::default();
        assert_eq!((p.width, p.height), (128, 128));
        assert_eq!(p.center(), DVec2::new(64.0, 64.0));
        assert_eq!(p.vertex_count, 24);
        assert_eq!(p.glow_offsets, vec![0, -1, -2]);
    }

    #[test]
    fn vertex_radius_bounds_match_modulation_ranges() {
        let (lo, hi) = MeteoriteParams::default().vertex_radius_bounds();
        assert!((lo - 48.0 * 0.65 * 0.85).abs() < 1e-9);
        assert!((hi - 48.0 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn largest_silhouette_fits_the_canvas() {
        let p = MeteoriteParams::default();
        let (_, hi) = p.vertex_radius_bounds();
        assert!(p.center[0] + hi < p.width as f64);
        assert!(p.center[0] - hi >= 0.0);
    }

    #[test]
    fn json_round_trip() {
        let p = MeteoriteParams::default();
        let json = serde_json::to_string(&p).unwrap();
        let back: MeteoriteParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
