//! The rasterization seam.
//!
//! The compositor only needs two primitives: fill a closed outline and fill
//! a rectangle, each with a color and an opacity, blended source-over.
//! [`PixmapSurface`] provides them in software on top of `tiny-skia`.

use poster_core::{Outline, PosterError, Srgb};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

/// Something the compositor can paint on.
///
/// This trait is object-safe so recorders and rasterizers can be swapped
/// behind `&mut dyn Surface`.
pub trait Surface {
    /// Pixel size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fills a closed outline given in normalized coordinates, y up.
    ///
    /// Degenerate outlines paint nothing. No stroke is drawn.
    fn fill_outline(&mut self, outline: &Outline, color: Srgb, alpha: f64);

    /// Fills an axis-aligned rectangle given in pixels, y down.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Srgb, alpha: f64);
}

/// Anti-aliased software surface backed by a `tiny_skia::Pixmap`.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Creates a surface cleared to an opaque `background`.
    ///
    /// Returns `PosterError::InvalidDimensions` if the pixmap cannot be allocated.
    pub fn new(width: u32, height: u32, background: Srgb) -> Result<Self, PosterError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(PosterError::InvalidDimensions)?;
        pixmap.fill(to_color(background, 1.0));
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn paint(color: Srgb, alpha: f64) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_color(color, alpha));
        paint.anti_alias = true;
        paint
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn fill_outline(&mut self, outline: &Outline, color: Srgb, alpha: f64) {
        let w = self.pixmap.width() as f64;
        let h = self.pixmap.height() as f64;
        let mut points = outline
            .points()
            .iter()
            .map(|p| ((p.x * w) as f32, ((1.0 - p.y) * h) as f32));

        let Some((x0, y0)) = points.next() else {
            return;
        };
        let mut pb = PathBuilder::with_capacity(outline.len() + 1, outline.len());
        pb.move_to(x0, y0);
        for (x, y) in points {
            pb.line_to(x, y);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        self.pixmap.fill_path(
            &path,
            &Self::paint(color, alpha),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Srgb, alpha: f64) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &Self::paint(color, alpha), Transform::identity(), None);
    }
}

/// Converts to a straight-alpha `tiny_skia::Color`, clamping every channel.
fn to_color(color: Srgb, alpha: f64) -> Color {
    let ch = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) as f32 };
    Color::from_rgba(ch(color.r), ch(color.g), ch(color.b), ch(alpha)).unwrap_or(Color::TRANSPARENT)
}
