//! 8-bit RGBA color type.
//!
//! Sprites are flat pixel art, so colors are stored exactly as they land in the
//! output file: four `u8` channels, straight (non-premultiplied) alpha. No
//! blending happens anywhere in the pipeline; later writes overwrite earlier
//! ones.

use crate::error::SpriteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color with 8-bit channels.
///
/// Serializes as a hex string: `"#rrggbb"` when opaque, `"#rrggbbaa"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the background of every canvas.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns true if alpha is zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// The four channels in R, G, B, A order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses `"#rrggbb"`, `"#rrggbbaa"` or the same without `#` (case insensitive).
    ///
    /// Six digits produce an opaque color.
    pub fn from_hex(hex: &str) -> Result<Rgba, SpriteError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(SpriteError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            hex.get(range)
                .ok_or_else(|| SpriteError::InvalidColor(format!("non-ascii {name} component")))
                .and_then(|s| {
                    u8::from_str_radix(s, 16).map_err(|e| {
                        SpriteError::InvalidColor(format!("invalid {name} component: {e}"))
                    })
                })
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;
        let a = if hex.len() == 8 {
            channel(6..8, "alpha")?
        } else {
            255
        };
        Ok(Rgba::new(r, g, b, a))
    }

    /// Formats as `"#rrggbb"` for opaque colors, `"#rrggbbaa"` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_with_hash() {
        let c = Rgba::from_hex("#dc143c").unwrap();
        assert_eq!(c, Rgba::opaque(220, 20, 60));
    }

    #[test]
    fn from_hex_without_hash_and_uppercase() {
        let c = Rgba::from_hex("FF2850").unwrap();
        assert_eq!(c, Rgba::opaque(255, 40, 80));
    }

    #[test]
    fn from_hex_with_alpha() {
        let c = Rgba::from_hex("#19080880").unwrap();
        assert_eq!(c, Rgba::new(25, 8, 8, 128));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Rgba::from_hex("#fff").is_err());
        assert!(Rgba::from_hex("#1234567").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        let err = Rgba::from_hex("#gg0000").unwrap_err();
        assert!(err.to_string().contains("red"), "got: {err}");
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        assert!(Rgba::from_hex("é0000").is_err());
    }

    #[test]
    fn to_hex_omits_alpha_when_opaque() {
        assert_eq!(Rgba::opaque(30, 0, 0).to_hex(), "#1e0000");
        assert_eq!(Rgba::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let c = Rgba::opaque(180, 10, 10);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#b40a0a\"");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn deserialize_rejects_bad_hex() {
        assert!(serde_json::from_str::<Rgba>("\"#zz\"").is_err());
    }

    #[test]
    fn transparent_is_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::opaque(1, 2, 3).is_transparent());
    }
}
