//! PNG export of a finished [`Canvas`].
//!
//! Feature-gated behind `png` (default on) so the generator can be used
//! without pulling in the `image` crate.

use abyss_sprite_core::{Canvas, SpriteError};
use std::path::Path;
use tracing::info;

/// Writes the canvas as an 8-bit RGBA PNG, replacing any existing file.
///
/// Returns `SpriteError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `SpriteError::Io` on write failure (including a missing parent
/// directory).
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), SpriteError> {
    let w = u32::try_from(canvas.width()).map_err(|_| SpriteError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| SpriteError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, canvas.to_rgba_bytes())
        .ok_or_else(|| SpriteError::Io("RGBA buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SpriteError::Io(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), width = w, height = h, "wrote png");
    Ok(())
}
