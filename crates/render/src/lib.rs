#![deny(unsafe_code)]
//! Rendering for the poster engine: compositing planned layers onto a
//! software surface and exporting the result.
//!
//! This crate sits between `poster-core` (which plans layers) and the
//! callers that display or deliver posters. The rasterizer sits behind the
//! [`Surface`] trait; [`PixmapSurface`] is the `tiny-skia` implementation.

pub mod canvas;
pub mod compositor;
pub mod font;
pub mod pixel;
pub mod surface;

#[cfg(feature = "png")]
pub mod export;

use log::debug;
use poster_core::{plan_layers, Layer, PosterConfig, PosterError, Srgb, Style};
use tiny_skia::Pixmap;

pub use canvas::CanvasDescriptor;
pub use compositor::composite;
#[cfg(feature = "png")]
pub use export::{encode_png, export_png, write_png, ExportOptions};
pub use surface::{PixmapSurface, Surface};

/// Renders `layers` back-to-front onto a fresh `background`-filled canvas.
///
/// `layers` must be in ascending depth order, as [`plan_layers`] returns
/// them. Returns `PosterError::InvalidDimensions` if the canvas resolves to
/// an unusable pixel size.
pub fn render(
    layers: &[Layer],
    style: Style,
    background: Srgb,
    canvas: &CanvasDescriptor,
    title: &str,
) -> Result<Pixmap, PosterError> {
    let (width, height) = canvas.pixel_size()?;
    let mut surface = PixmapSurface::new(width, height, background)?;
    let fills = composite(&mut surface, layers, style, title, canvas);
    debug!(
        "rendered {} layers as {style} at {width}x{height} ({fills} fills)",
        layers.len()
    );
    Ok(surface.into_pixmap())
}

/// Plans and renders `config` in one call, titled with [`PosterConfig::title`].
pub fn generate(config: &PosterConfig, canvas: &CanvasDescriptor) -> Result<Pixmap, PosterError> {
    let layers = plan_layers(config);
    render(
        &layers,
        config.style,
        config.background,
        canvas,
        &config.title(),
    )
}
