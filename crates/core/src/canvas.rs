//! Mutable RGBA pixel grid that every render pass draws into.
//!
//! A [`Canvas`] stores `width * height` [`Rgba`] values in row-major order and
//! starts fully transparent. Writes outside the grid are clipped silently, so
//! passes can plot jittered or offset points without bounds bookkeeping.

use glam::IVec2;

use crate::color::Rgba;
use crate::error::SpriteError;
use crate::mask::Mask;

/// A 2D grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<Rgba>,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    ///
    /// Returns `SpriteError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, SpriteError> {
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SpriteError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![Rgba::TRANSPARENT; len],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major pixel data.
    pub fn data(&self) -> &[Rgba] {
        &self.data
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Pixel at `(x, y)`, or `None` off the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Overwrites the pixel at `(x, y)`. Off-canvas writes are ignored.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = color;
        }
    }

    /// Overwrites every listed pixel with one color.
    pub fn plot_all(&mut self, points: &[IVec2], color: Rgba) {
        for p in points {
            self.put(p.x, p.y, color);
        }
    }

    /// Fills the `w × h` rectangle whose top-left corner is `(x, y)`, clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn count_opaque(&self) -> usize {
        self.data.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Copies this canvas through `mask`: inside pixels keep their value,
    /// outside pixels become [`Rgba::TRANSPARENT`].
    ///
    /// Returns `SpriteError::DimensionMismatch` if the mask is a different size.
    pub fn masked(&self, mask: &Mask) -> Result<Canvas, SpriteError> {
        if self.width != mask.width() || self.height != mask.height() {
            return Err(SpriteError::DimensionMismatch {
                lhs_w: self.width,
                lhs_h: self.height,
                rhs_w: mask.width(),
                rhs_h: mask.height(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(mask.data())
            .map(|(&c, &inside)| if inside { c } else { Rgba::TRANSPARENT })
            .collect();
        Ok(Canvas {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Flattens to an RGBA8 byte buffer of length `width * height * 4`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_array()).collect()
    }
}
