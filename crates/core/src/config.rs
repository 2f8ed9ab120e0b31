//! Reproducible poster configuration.
//!
//! A [`PosterConfig`] captures everything needed to recreate a poster:
//! style, shape, layer count, palette mode, wobble, seed, and background.
//! Two identical configs produce bit-identical layers and images.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::PosterError;
use crate::palette::PaletteMode;

/// Largest seed handed out by [`random_seed`].
pub const MAX_RANDOM_SEED: u64 = 10_000;

/// Boundary ranges enforced by [`PosterConfig::validate`].
pub const LAYER_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=30;
pub const WOBBLE_RANGE: std::ops::RangeInclusive<f64> = 0.01..=0.3;

const DEFAULT_LAYER_COUNT: usize = 8;
const DEFAULT_WOBBLE: f64 = 0.15;
const DEFAULT_SEED: u64 = 42;
/// `#F7F7F7`
const STANDARD_BACKGROUND: Srgb = Srgb::new(247.0 / 255.0, 247.0 / 255.0, 247.0 / 255.0);
/// `#262633`
const GLOWING_BACKGROUND: Srgb = Srgb::new(38.0 / 255.0, 38.0 / 255.0, 51.0 / 255.0);

/// Rendering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// One flat fill per layer with random opacity.
    #[default]
    Standard,
    /// Glow, shadow, and main fill per layer; opacity grows with depth.
    Glowing,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Standard, Style::Glowing];

    pub fn name(self) -> &'static str {
        match self {
            Style::Standard => "standard",
            Style::Glowing => "glowing",
        }
    }

    /// Number of colors sampled before planning layers.
    pub fn palette_size(self) -> usize {
        match self {
            Style::Standard => 6,
            Style::Glowing => 8,
        }
    }
}

impl FromStr for Style {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Style::Standard),
            "glowing" => Ok(Style::Glowing),
            _ => Err(PosterError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape family every layer of a poster is drawn with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Blob,
    Heart,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Blob, ShapeKind::Heart];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Blob => "blob",
            ShapeKind::Heart => "heart",
        }
    }

    /// Capitalized name used in poster titles.
    pub fn title(self) -> &'static str {
        match self {
            ShapeKind::Blob => "Blob",
            ShapeKind::Heart => "Heart",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blob" => Ok(ShapeKind::Blob),
            "heart" => Ok(ShapeKind::Heart),
            _ => Err(PosterError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable description of one poster.
///
/// `wobble` only applies to [`Style::Standard`]; the glowing style draws a
/// fresh wobble per layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterConfig {
    pub style: Style,
    pub shape: ShapeKind,
    pub layer_count: usize,
    pub palette_mode: PaletteMode,
    pub wobble: f64,
    pub seed: u64,
    pub background: Srgb,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl PosterConfig {
    /// Light background, blobs.
    pub fn standard() -> Self {
        Self {
            style: Style::Standard,
            shape: ShapeKind::Blob,
            layer_count: DEFAULT_LAYER_COUNT,
            palette_mode: PaletteMode::Pastel,
            wobble: DEFAULT_WOBBLE,
            seed: DEFAULT_SEED,
            background: STANDARD_BACKGROUND,
        }
    }

    /// Dark background, hearts.
    pub fn glowing() -> Self {
        Self {
            style: Style::Glowing,
            shape: ShapeKind::Heart,
            background: GLOWING_BACKGROUND,
            ..Self::standard()
        }
    }

    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Standard => Self::standard(),
            Style::Glowing => Self::glowing(),
        }
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_layer_count(mut self, layer_count: usize) -> Self {
        self.layer_count = layer_count;
        self
    }

    pub fn with_palette_mode(mut self, mode: PaletteMode) -> Self {
        self.palette_mode = mode;
        self
    }

    pub fn with_wobble(mut self, wobble: f64) -> Self {
        self.wobble = wobble;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_background(mut self, background: Srgb) -> Self {
        self.background = background;
        self
    }

    /// Checks the ranges the control surface allows.
    ///
    /// Planning does not require this; it is for callers at the input
    /// boundary.
    pub fn validate(&self) -> Result<(), PosterError> {
        if !LAYER_COUNT_RANGE.contains(&self.layer_count) {
            return Err(PosterError::InvalidConfig(format!(
                "layer_count must be in {}..={}, got {}",
                LAYER_COUNT_RANGE.start(),
                LAYER_COUNT_RANGE.end(),
                self.layer_count
            )));
        }
        if self.style == Style::Standard && !WOBBLE_RANGE.contains(&self.wobble) {
            return Err(PosterError::InvalidConfig(format!(
                "wobble must be in {}..={}, got {}",
                WOBBLE_RANGE.start(),
                WOBBLE_RANGE.end(),
                self.wobble
            )));
        }
        Ok(())
    }

    /// Caption overlaid on the rendered poster.
    pub fn title(&self) -> String {
        match self.style {
            Style::Standard => format!(
                "Interactive Poster • {} {}",
                self.palette_mode,
                self.shape.title()
            ),
            Style::Glowing => format!("3D-like Glowing Poster • {}", self.shape.title()),
        }
    }

    /// Suggested download name, e.g. `poster_glowing_heart_7.png`.
    pub fn file_name(&self) -> String {
        format!("poster_{}_{}_{}.png", self.style, self.shape, self.seed)
    }
}

/// Draws a fresh seed in `[0, MAX_RANDOM_SEED]` from the thread-local OS-seeded generator.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..=MAX_RANDOM_SEED)
}
