//! Irregular rock outline: a chipped hexagon traced by jittered polar samples.

use abyss_sprite_core::geometry::{polar, radial_offset, round_to_pixel};
use abyss_sprite_core::{Mask, RandomSource, SpriteError};
use glam::{DVec2, IVec2};
use std::f64::consts::TAU;

use crate::params::MeteoriteParams;

/// The closed outline of the rock around its center.
///
/// Vertices are in strictly increasing angle order, one per `TAU / n` step,
/// so the loop is simple under the configured jaggedness bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    center: DVec2,
    vertices: Vec<IVec2>,
}

impl Silhouette {
    /// Samples `params.vertex_count` vertices around the center.
    ///
    /// Each vertex sits at `radius * hex * jag` where
    /// `hex = hex_base + hex_amplitude * |cos(hex_lobes * angle)|` gives the
    /// six-fold bulges and `jag` is drawn from `params.jaggedness`.
    pub fn generate(params: &MeteoriteParams, rng: &mut dyn RandomSource) -> Self {
        let center = params.center();
        let n = params.vertex_count;
        let [jag_min, jag_max] = params.jaggedness;
        let vertices = (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * TAU;
                let hex = params.hex_base
                    + params.hex_amplitude * (params.hex_lobes * angle).cos().abs();
                let jag = rng.next_range_inclusive(jag_min, jag_max);
                round_to_pixel(polar(center, params.radius * hex * jag, angle))
            })
            .collect();
        Self { center, vertices }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn vertices(&self) -> &[IVec2] {
        &self.vertices
    }

    /// The outline with every vertex pushed `offset` pixels along its own
    /// radial direction (negative = inward), rounded to pixels.
    ///
    /// Offset 0 returns the vertices unchanged.
    pub fn offset_ring(&self, offset: i32) -> Vec<IVec2> {
        if offset == 0 {
            return self.vertices.clone();
        }
        self.vertices
            .iter()
            .map(|v| round_to_pixel(radial_offset(self.center, v.as_dvec2(), f64::from(offset))))
            .collect()
    }

    /// Rasterizes the outline into a clip mask.
    pub fn mask(&self, width: usize, height: usize) -> Result<Mask, SpriteError> {
        Mask::from_polygon(width, height, &self.vertices)
    }
}
