//! Lossless PNG export.
//!
//! Feature-gated behind `png` (default on) so display-only builds do not pull
//! in the `image` crate. Export is all-or-nothing: the PNG is encoded fully
//! in memory first, and files are written to a sibling temporary path and
//! renamed into place, so a failure never leaves a truncated image behind.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{imageops, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use log::info;
use poster_core::{PosterConfig, PosterError, Srgb};
use tiny_skia::Pixmap;

use crate::canvas::CanvasDescriptor;
use crate::generate;
use crate::pixel::pixmap_to_rgba;

/// Resolution and margin of an exported poster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub dpi: f64,
    /// Background-colored margin around the drawable area, in inches.
    pub pad_inches: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            pad_inches: 0.1,
        }
    }
}

impl ExportOptions {
    /// Margin in whole pixels. Negative or non-finite padding is treated as none.
    pub fn pad_pixels(&self) -> u32 {
        let px = (self.pad_inches * self.dpi).round();
        if px.is_finite() && px > 0.0 {
            px.min(u32::MAX as f64) as u32
        } else {
            0
        }
    }
}

/// Renders `config` at the export resolution and encodes it as PNG bytes.
///
/// Any failure is reported as `PosterError::ExportFailed`.
pub fn export_png(config: &PosterConfig, options: &ExportOptions) -> Result<Vec<u8>, PosterError> {
    let canvas = CanvasDescriptor::for_style(config.style).with_dpi(options.dpi);
    let pixmap =
        generate(config, &canvas).map_err(|e| PosterError::ExportFailed(e.to_string()))?;
    encode_png(&pixmap, config.background, options.pad_pixels())
}

/// Encodes `pixmap` as PNG with a `pad` pixel margin filled with `background`.
///
/// The canvas is the tight bounding box of the drawable area, so the margin
/// is the only thing added and it is never transparent.
pub fn encode_png(pixmap: &Pixmap, background: Srgb, pad: u32) -> Result<Vec<u8>, PosterError> {
    let (w, h) = (pixmap.width(), pixmap.height());
    let content = RgbaImage::from_raw(w, h, pixmap_to_rgba(pixmap))
        .ok_or_else(|| PosterError::ExportFailed("RGBA buffer size mismatch".into()))?;

    let too_large = || PosterError::ExportFailed("padded image is too large".into());
    let pad2 = pad.checked_mul(2).ok_or_else(too_large)?;
    let out_w = w.checked_add(pad2).ok_or_else(too_large)?;
    let out_h = h.checked_add(pad2).ok_or_else(too_large)?;

    let [r, g, b] = background.to_rgb8();
    let mut image = RgbaImage::from_pixel(out_w, out_h, Rgba([r, g, b, 255]));
    imageops::replace(&mut image, &content, i64::from(pad), i64::from(pad));

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(image.as_raw(), out_w, out_h, ExtendedColorType::Rgba8)
        .map_err(|e| PosterError::ExportFailed(e.to_string()))?;
    Ok(bytes)
}

/// Writes encoded bytes to `path` atomically.
pub fn write_png(bytes: &[u8], path: &Path) -> Result<(), PosterError> {
    let tmp = temp_sibling(path);
    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(PosterError::ExportFailed(format!(
            "{}: {e}",
            path.display()
        )));
    }
    info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "poster".into());
    name.push(".partial");
    path.with_file_name(name)
}
