//! Physical canvas size: figure dimensions in inches plus a DPI.

use poster_core::{PosterError, Style};

/// DPI used for on-screen previews.
pub const DISPLAY_DPI: f64 = 100.0;

/// Figure size in inches and the resolution to rasterize it at.
///
/// The whole canvas is the drawable area: normalized coordinates [0, 1]
/// stretch across it on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasDescriptor {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
}

impl CanvasDescriptor {
    pub fn new(width_in: f64, height_in: f64, dpi: f64) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Default figure for a style at [`DISPLAY_DPI`]: 6x8 in portrait for
    /// standard, 7x7 in square for glowing.
    pub fn for_style(style: Style) -> Self {
        match style {
            Style::Standard => Self::new(6.0, 8.0, DISPLAY_DPI),
            Style::Glowing => Self::new(7.0, 7.0, DISPLAY_DPI),
        }
    }

    /// A canvas of exactly `width` x `height` pixels at [`DISPLAY_DPI`].
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(
            width as f64 / DISPLAY_DPI,
            height as f64 / DISPLAY_DPI,
            DISPLAY_DPI,
        )
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Resolves the pixel size, rounding inches x DPI.
    ///
    /// Returns `PosterError::InvalidDimensions` if either side rounds to
    /// zero, is not finite, or the RGBA buffer size would overflow.
    pub fn pixel_size(&self) -> Result<(u32, u32), PosterError> {
        let width = to_pixels(self.width_in * self.dpi)?;
        let height = to_pixels(self.height_in * self.dpi)?;
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PosterError::InvalidDimensions)?;
        Ok((width, height))
    }

    /// Converts a length in points (1/72 in) to pixels.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points / 72.0 * self.dpi
    }
}

fn to_pixels(length: f64) -> Result<u32, PosterError> {
    let rounded = length.round();
    if !rounded.is_finite() || rounded < 1.0 || rounded > u32::MAX as f64 {
        return Err(PosterError::InvalidDimensions);
    }
    Ok(rounded as u32)
}
