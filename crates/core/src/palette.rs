//! Fixed sprite palette grouped into shell, core and neon families.
//!
//! The core family is a five-step energy ramp indexed by [`CoreBand`]; a chaos
//! value in roughly [0, 1] picks a band through [`CoreBand::classify`].

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Dark structural tones for the crumbling rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellTones {
    pub dark: Rgba,
    pub mid: Rgba,
}

/// Energy ramp from near-black up to an intense pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreRamp {
    pub black: Rgba,
    pub dark: Rgba,
    pub mid: Rgba,
    pub bright: Rgba,
    pub intense: Rgba,
}

/// Crimson rim-light tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeonTones {
    pub edge: Rgba,
    pub bright: Rgba,
}

/// One of the five discrete core color bands, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreBand {
    Black,
    Dark,
    Mid,
    Bright,
    Intense,
}

impl CoreBand {
    /// Every band, darkest first.
    pub const ALL: [CoreBand; 5] = [
        CoreBand::Black,
        CoreBand::Dark,
        CoreBand::Mid,
        CoreBand::Bright,
        CoreBand::Intense,
    ];

    /// Maps a chaos value to its band. Lower bounds are inclusive.
    ///
    /// | chaos          | band      |
    /// |----------------|-----------|
    /// | >= 0.85        | `Intense` |
    /// | [0.70, 0.85)   | `Bright`  |
    /// | [0.45, 0.70)   | `Mid`     |
    /// | [0.25, 0.45)   | `Dark`    |
    /// | < 0.25, NaN    | `Black`   |
    pub fn classify(chaos: f64) -> CoreBand {
        match chaos {
            c if c >= 0.85 => CoreBand::Intense,
            c if c >= 0.70 => CoreBand::Bright,
            c if c >= 0.45 => CoreBand::Mid,
            c if c >= 0.25 => CoreBand::Dark,
            _ => CoreBand::Black,
        }
    }
}

/// The full sprite palette. Immutable for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub shell: ShellTones,
    pub core: CoreRamp,
    pub neon: NeonTones,
}

impl Palette {
    /// Dark red rock, red-hot core, crimson neon rim.
    pub const fn abyss() -> Self {
        Self {
            shell: ShellTones {
                dark: Rgba::opaque(25, 8, 8),
                mid: Rgba::opaque(45, 15, 15),
            },
            core: CoreRamp {
                black: Rgba::opaque(30, 0, 0),
                dark: Rgba::opaque(100, 0, 0),
                mid: Rgba::opaque(180, 10, 10),
                bright: Rgba::opaque(255, 30, 30),
                intense: Rgba::opaque(255, 60, 60),
            },
            neon: NeonTones {
                edge: Rgba::opaque(220, 20, 60),
                bright: Rgba::opaque(255, 40, 80),
            },
        }
    }

    /// Core ramp color for a band.
    pub fn core_color(&self, band: CoreBand) -> Rgba {
        match band {
            CoreBand::Black => self.core.black,
            CoreBand::Dark => self.core.dark,
            CoreBand::Mid => self.core.mid,
            CoreBand::Bright => self.core.bright,
            CoreBand::Intense => self.core.intense,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::abyss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_band_boundaries_are_inclusive_below() {
        assert_eq!(CoreBand::classify(0.85), CoreBand::Intense);
        assert_eq!(CoreBand::classify(0.849_999), CoreBand::Bright);
        assert_eq!(CoreBand::classify(0.70), CoreBand::Bright);
        assert_eq!(CoreBand::classify(0.699_999), CoreBand::Mid);
        assert_eq!(CoreBand::classify(0.45), CoreBand::Mid);
        assert_eq!(CoreBand::classify(0.449_999), CoreBand::Dark);
        assert_eq!(CoreBand::classify(0.25), CoreBand::Dark);
        assert_eq!(CoreBand::classify(0.249_999), CoreBand::Black);
    }

    #[test]
    fn classify_handles_values_outside_unit_interval() {
        assert_eq!(CoreBand::classify(-0.4), CoreBand::Black);
        assert_eq!(CoreBand::classify(1.3), CoreBand::Intense);
        assert_eq!(CoreBand::classify(f64::NAN), CoreBand::Black);
    }

    #[test]
    fn core_colors_get_brighter_along_the_ramp() {
        let p = Palette::abyss();
        let reds: Vec<u8> = CoreBand::ALL.iter().map(|&b| p.core_color(b).r).collect();
        assert!(reds.windows(2).all(|w| w[0] <= w[1]), "ramp not ordered: {reds:?}");
    }

    #[test]
    fn all_palette_colors_are_opaque() {
        let p = Palette::abyss();
        let all = [
            p.shell.dark,
            p.shell.mid,
            p.core.black,
            p.core.dark,
            p.core.mid,
            p.core.bright,
            p.core.intense,
            p.neon.edge,
            p.neon.bright,
        ];
        assert!(all.iter().all(|c| c.a == 255));
    }

    #[test]
    fn palette_serializes_as_hex_families() {
        let v = serde_json::to_value(Palette::abyss()).unwrap();
        assert_eq!(v["neon"]["edge"], "#dc143c");
        assert_eq!(v["core"]["black"], "#1e0000");
        assert_eq!(v["shell"]["mid"], "#2d0f0f");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn in_band(band: CoreBand, c: f64) -> bool {
            match band {
                CoreBand::Intense => c >= 0.85,
                CoreBand::Bright => (0.70..0.85).contains(&c),
                CoreBand::Mid => (0.45..0.70).contains(&c),
                CoreBand::Dark => (0.25..0.45).contains(&c),
                CoreBand::Black => c < 0.25,
            }
        }

        proptest! {
            #[test]
            fn exactly_one_band_contains_any_chaos_value(chaos in -0.5_f64..1.5) {
                let hits = CoreBand::ALL.iter().filter(|&&b| in_band(b, chaos)).count();
                prop_assert_eq!(hits, 1);
                prop_assert!(in_band(CoreBand::classify(chaos), chaos));
            }

            #[test]
            fn classify_is_monotonic(a in 0.0_f64..1.01, b in 0.0_f64..1.01) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(CoreBand::classify(lo) <= CoreBand::classify(hi));
            }
        }
    }
}
