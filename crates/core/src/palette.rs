//! Randomized HSV palettes.
//!
//! A [`PaletteMode`] names a sampling strategy in HSV space. Each sampled
//! triple is converted to sRGB once, so a [`Palette`] is just an ordered list
//! of colors that the planner picks from by uniform index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{hsv_to_srgb, Hsv, Srgb};
use crate::prng::Xorshift64;

/// Hue used by [`PaletteMode::Mono`] when no other base hue is given.
pub const DEFAULT_BASE_HUE: f64 = 0.60;

/// Named HSV sampling strategy.
///
/// Parsing never fails: any unrecognized name maps to [`PaletteMode::Random`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaletteMode {
    #[default]
    Pastel,
    Vivid,
    Mono,
    Random,
}

impl PaletteMode {
    pub const ALL: [PaletteMode; 4] = [
        PaletteMode::Pastel,
        PaletteMode::Vivid,
        PaletteMode::Mono,
        PaletteMode::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteMode::Pastel => "pastel",
            PaletteMode::Vivid => "vivid",
            PaletteMode::Mono => "mono",
            PaletteMode::Random => "random",
        }
    }

    /// Draws one HSV triple. Draw order is hue (unless fixed), saturation, value.
    fn sample(self, base_hue: f64, rng: &mut Xorshift64) -> Hsv {
        match self {
            PaletteMode::Pastel => Hsv {
                h: rng.next_f64(),
                s: rng.next_range(0.15, 0.35),
                v: rng.next_range(0.9, 1.0),
            },
            PaletteMode::Vivid => Hsv {
                h: rng.next_f64(),
                s: rng.next_range(0.8, 1.0),
                v: rng.next_range(0.8, 1.0),
            },
            PaletteMode::Mono => Hsv {
                h: base_hue,
                s: rng.next_range(0.2, 0.6),
                v: rng.next_range(0.5, 1.0),
            },
            PaletteMode::Random => Hsv {
                h: rng.next_f64(),
                s: rng.next_range(0.3, 1.0),
                v: rng.next_range(0.5, 1.0),
            },
        }
    }
}

impl From<&str> for PaletteMode {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pastel" => PaletteMode::Pastel,
            "vivid" => PaletteMode::Vivid,
            "mono" => PaletteMode::Mono,
            _ => PaletteMode::Random,
        }
    }
}

impl From<String> for PaletteMode {
    fn from(name: String) -> Self {
        PaletteMode::from(name.as_str())
    }
}

impl From<PaletteMode> for String {
    fn from(mode: PaletteMode) -> Self {
        mode.name().to_string()
    }
}

impl FromStr for PaletteMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PaletteMode::from(s))
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of sRGB colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    pub fn new(colors: Vec<Srgb>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Picks a color uniformly by index, consuming one draw.
    ///
    /// An empty palette yields black without drawing.
    pub fn choose(&self, rng: &mut Xorshift64) -> Srgb {
        rng.choose(&self.colors).copied().unwrap_or(Srgb::BLACK)
    }
}

/// Samples `size` colors for `mode` from `rng`.
///
/// `base_hue` only affects [`PaletteMode::Mono`]; pass [`DEFAULT_BASE_HUE`]
/// for the standard look.
pub fn generate_palette(
    size: usize,
    mode: PaletteMode,
    base_hue: f64,
    rng: &mut Xorshift64,
) -> Palette {
    let colors = (0..size)
        .map(|_| hsv_to_srgb(mode.sample(base_hue, rng)))
        .collect();
    Palette { colors }
}
