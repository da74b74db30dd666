//! Error types for the abyss-sprite core.

use thiserror::Error;

/// Errors produced while building or exporting a sprite.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// Width or height was zero (or overflowed) when creating a canvas or mask.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// Two grids had incompatible dimensions (e.g. compositing a canvas through a mask).
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Writing the output image failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = SpriteError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn dimension_mismatch_includes_all_dimensions() {
        let err = SpriteError::DimensionMismatch {
            lhs_w: 10,
            lhs_h: 20,
            rhs_w: 30,
            rhs_h: 40,
        };
        let msg = format!("{err}");
        assert!(msg.contains("10"), "missing lhs_w in: {msg}");
        assert!(msg.contains("20"), "missing lhs_h in: {msg}");
        assert!(msg.contains("30"), "missing rhs_w in: {msg}");
        assert!(msg.contains("40"), "missing rhs_h in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let msg = SpriteError::InvalidColor("bad hex".into()).to_string();
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let msg = SpriteError::Io("disk full".into()).to_string();
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn sprite_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpriteError>();
    }

    #[test]
    fn sprite_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<SpriteError>();
    }
}
