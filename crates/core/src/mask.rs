//! Binary inside/outside mask used to clip the finished sprite.

use glam::IVec2;

use crate::error::SpriteError;
use crate::raster::{polygon_outline, polygon_spans};

/// A grid of inside/outside flags, row-major, same layout as [`Canvas`](crate::Canvas).
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Mask {
    /// Builds a mask by evaluating `inside(x, y)` for every cell.
    ///
    /// Returns `SpriteError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn from_fn(
        width: usize,
        height: usize,
        inside: impl Fn(usize, usize) -> bool,
    ) -> Result<Self, SpriteError> {
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SpriteError::InvalidDimensions)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(inside(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Rasterizes a closed polygon: even-odd interior plus the outline pixels.
    ///
    /// Parts of the polygon off the grid are clipped.
    pub fn from_polygon(
        width: usize,
        height: usize,
        points: &[IVec2],
    ) -> Result<Self, SpriteError> {
        let mut mask = Self::from_fn(width, height, |_, _| false)?;
        for span in polygon_spans(points) {
            for x in span.x0..=span.x1 {
                mask.mark(x, span.y);
            }
        }
        for p in polygon_outline(points) {
            mask.mark(p.x, p.y);
        }
        Ok(mask)
    }

    fn mark(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = true;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major flags, `true` = inside.
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Whether `(x, y)` is inside. Off-grid coordinates are outside.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.data[i])
    }

    /// Number of inside cells.
    pub fn count_inside(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}
