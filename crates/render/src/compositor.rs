//! Back-to-front layer compositing in the two poster styles.
//!
//! Layers are painted in the order given, which must be ascending depth.
//! The standard style paints one flat fill per layer. The glowing style
//! paints four fills per layer: two faint glow copies nudged diagonally,
//! a dark drop shadow, then the layer itself.
//!
//! A standard title overlays the shapes near the top-left corner. A glowing
//! title sits in a background band above the drawing area, which shrinks
//! vertically to make room for it.

use glam::DVec2;
use poster_core::{Layer, Outline, Srgb, Style};

use crate::canvas::CanvasDescriptor;
use crate::font;
use crate::surface::Surface;

const GLOW_OFFSET: f64 = 0.008;
const GLOW_ALPHA: f64 = 0.08;
const SHADOW_OFFSET: f64 = 0.015;
const SHADOW_ALPHA: f64 = 0.20;
pub const SHADOW_COLOR: Srgb = Srgb::new(0.05, 0.05, 0.10);

const STANDARD_TITLE_POINTS: f64 = 12.0;
const GLOWING_TITLE_POINTS: f64 = 14.0;
/// Standard titles start at this axes fraction from the top-left.
const STANDARD_TITLE_ANCHOR: (f64, f64) = (0.05, 0.95);
/// Glowing titles are centered with this gap above them, as a fraction of height.
const GLOWING_TITLE_TOP: f64 = 0.02;
/// Gap between a glowing title and the drawing area below it.
const GLOWING_TITLE_PAD_POINTS: f64 = 6.0;

/// One fill of the glowing style, applied to every layer in this order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowPass {
    pub offset: DVec2,
    /// `None` paints with the layer's own color.
    pub color: Option<Srgb>,
    /// `None` paints with the layer's own alpha.
    pub alpha: Option<f64>,
}

pub const GLOW_PASSES: [GlowPass; 4] = [
    GlowPass {
        offset: DVec2::new(GLOW_OFFSET, -GLOW_OFFSET),
        color: None,
        alpha: Some(GLOW_ALPHA),
    },
    GlowPass {
        offset: DVec2::new(-GLOW_OFFSET, GLOW_OFFSET),
        color: None,
        alpha: Some(GLOW_ALPHA),
    },
    GlowPass {
        offset: DVec2::new(SHADOW_OFFSET, -SHADOW_OFFSET),
        color: Some(SHADOW_COLOR),
        alpha: Some(SHADOW_ALPHA),
    },
    GlowPass {
        offset: DVec2::ZERO,
        color: None,
        alpha: None,
    },
];

/// Paints `layers` onto `surface` and overlays `title`.
///
/// The surface must already hold the background. An empty title skips the
/// overlay. Returns the number of outline fills issued.
pub fn composite(
    surface: &mut dyn Surface,
    layers: &[Layer],
    style: Style,
    title: &str,
    canvas: &CanvasDescriptor,
) -> usize {
    let area = drawing_area(surface.size().1, style, title, canvas);
    let mut fills = 0;
    for layer in layers {
        match style {
            Style::Standard => {
                fill(surface, layer.outline(), DVec2::ZERO, area, layer.color(), layer.alpha());
                fills += 1;
            }
            Style::Glowing => {
                for pass in &GLOW_PASSES {
                    let color = pass.color.unwrap_or(layer.color());
                    let alpha = pass.alpha.unwrap_or(layer.alpha());
                    fill(surface, layer.outline(), pass.offset, area, color, alpha);
                    fills += 1;
                }
            }
        }
    }

    if !title.is_empty() {
        draw_title(surface, style, title, canvas);
    }
    fills
}

/// Per-axis scale that maps the unit square onto the drawing area.
///
/// Only a non-empty glowing title takes space: its band is cut from the top.
pub fn drawing_area(height: u32, style: Style, title: &str, canvas: &CanvasDescriptor) -> DVec2 {
    if style == Style::Standard || title.is_empty() || height == 0 {
        return DVec2::ONE;
    }
    let band = f64::from(glowing_title_band(height as f32, canvas));
    DVec2::new(1.0, (1.0 - band / f64::from(height)).max(0.0))
}

/// Height in pixels of the band holding a glowing title.
fn glowing_title_band(height: f32, canvas: &CanvasDescriptor) -> f32 {
    let cell = font::cell_size(canvas.points_to_pixels(GLOWING_TITLE_POINTS));
    GLOWING_TITLE_TOP as f32 * height
        + font::text_height(cell)
        + canvas.points_to_pixels(GLOWING_TITLE_PAD_POINTS) as f32
}

fn fill(
    surface: &mut dyn Surface,
    outline: &Outline,
    offset: DVec2,
    area: DVec2,
    color: Srgb,
    alpha: f64,
) {
    if offset == DVec2::ZERO && area == DVec2::ONE {
        surface.fill_outline(outline, color, alpha);
    } else {
        surface.fill_outline(&outline.translated(offset).scaled(area), color, alpha);
    }
}

/// Standard: dark text at the top-left. Glowing: white text centered in the band.
fn draw_title(surface: &mut dyn Surface, style: Style, title: &str, canvas: &CanvasDescriptor) {
    let (width, height) = surface.size();
    let (width, height) = (width as f32, height as f32);

    match style {
        Style::Standard => {
            let cell = font::cell_size(canvas.points_to_pixels(STANDARD_TITLE_POINTS));
            let (ax, ay) = STANDARD_TITLE_ANCHOR;
            let x = ax as f32 * width;
            let baseline = (1.0 - ay as f32) * height;
            let top = baseline - font::text_height(cell);
            font::draw_text(surface, title, x, top, cell, Srgb::BLACK);
        }
        Style::Glowing => {
            let cell = font::cell_size(canvas.points_to_pixels(GLOWING_TITLE_POINTS));
            let x = ((width - font::text_width(title, cell)) / 2.0).max(0.0);
            let top = GLOWING_TITLE_TOP as f32 * height;
            font::draw_text(surface, title, x, top, cell, Srgb::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poster_core::{plan_layers, PosterConfig};

    #[derive(Debug, Clone, PartialEq)]
    struct Fill {
        first: DVec2,
        color: Srgb,
        alpha: f64,
    }

    #[derive(Default)]
    struct Recorder {
        fills: Vec<Fill>,
        rects: usize,
        rect_colors: Vec<Srgb>,
        rect_bottom: f32,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (600, 800)
        }

        fn fill_outline(&mut self, outline: &Outline, color: Srgb, alpha: f64) {
            self.fills.push(Fill {
                first: outline.points()[0],
                color,
                alpha,
            });
        }

        fn fill_rect(&mut self, _x: f32, y: f32, _w: f32, h: f32, color: Srgb, _alpha: f64) {
            self.rects += 1;
            self.rect_colors.push(color);
            self.rect_bottom = self.rect_bottom.max(y + h);
        }
    }

    fn canvas() -> CanvasDescriptor {
        CanvasDescriptor::for_style(Style::Standard)
    }

    #[test]
    fn standard_paints_one_flat_fill_per_layer() {
        let layers = plan_layers(&PosterConfig::standard().with_layer_count(5));
        let mut rec = Recorder::default();
        let fills = composite(&mut rec, &layers, Style::Standard, "", &canvas());
        assert_eq!(fills, 5);
        assert_eq!(rec.fills.len(), 5);
        for (fill, layer) in rec.fills.iter().zip(&layers) {
            assert_eq!(fill.first, layer.outline().points()[0]);
            assert_eq!(fill.color, layer.color());
            assert_eq!(fill.alpha, layer.alpha());
        }
    }

    #[test]
    fn glowing_paints_glow_glow_shadow_main_per_layer() {
        let layers = plan_layers(&PosterConfig::glowing().with_layer_count(2));
        let mut rec = Recorder::default();
        let fills = composite(&mut rec, &layers, Style::Glowing, "", &canvas());
        assert_eq!(fills, 8);

        for (chunk, layer) in rec.fills.chunks(4).zip(&layers) {
            let origin = layer.outline().points()[0];
            let offset = |f: &Fill| f.first - origin;

            assert!((offset(&chunk[0]) - DVec2::new(0.008, -0.008)).length() < 1e-12);
            assert_eq!(chunk[0].color, layer.color());
            assert_eq!(chunk[0].alpha, 0.08);

            assert!((offset(&chunk[1]) - DVec2::new(-0.008, 0.008)).length() < 1e-12);
            assert_eq!(chunk[1].color, layer.color());
            assert_eq!(chunk[1].alpha, 0.08);

            assert!((offset(&chunk[2]) - DVec2::new(0.015, -0.015)).length() < 1e-12);
            assert_eq!(chunk[2].color, SHADOW_COLOR);
            assert_eq!(chunk[2].alpha, 0.20);

            assert_eq!(chunk[3].first, origin);
            assert_eq!(chunk[3].color, layer.color());
            assert_eq!(chunk[3].alpha, layer.alpha());
        }
    }

    #[test]
    fn layers_are_painted_in_given_order() {
        let layers = plan_layers(&PosterConfig::standard().with_layer_count(4));
        let mut rec = Recorder::default();
        composite(&mut rec, &layers, Style::Standard, "", &canvas());
        let firsts: Vec<DVec2> = rec.fills.iter().map(|f| f.first).collect();
        let expected: Vec<DVec2> = layers.iter().map(|l| l.outline().points()[0]).collect();
        assert_eq!(firsts, expected);
    }

    #[test]
    fn empty_title_draws_no_text() {
        let mut rec = Recorder::default();
        composite(&mut rec, &[], Style::Standard, "", &canvas());
        assert_eq!(rec.rects, 0);
        assert!(rec.fills.is_empty());
    }

    #[test]
    fn standard_title_is_dark_and_glowing_title_is_white() {
        let mut rec = Recorder::default();
        composite(&mut rec, &[], Style::Standard, "Poster", &canvas());
        assert!(rec.rects > 0);
        assert!(rec.rect_colors.iter().all(|c| *c == Srgb::BLACK));

        let mut rec = Recorder::default();
        composite(&mut rec, &[], Style::Glowing, "Poster", &canvas());
        assert!(rec.rects > 0);
        assert!(rec.rect_colors.iter().all(|c| *c == Srgb::WHITE));
    }

    #[test]
    fn glowing_title_sits_in_band_above_shapes() {
        let top = Layer::new(
            Outline::new(vec![DVec2::new(0.5, 1.0), DVec2::new(0.6, 0.5)]),
            Srgb::WHITE,
            0.5,
            0,
        );
        let mut rec = Recorder::default();
        composite(&mut rec, &[top], Style::Glowing, "Poster", &canvas());

        let area = drawing_area(800, Style::Glowing, "Poster", &canvas());
        assert!(area.y < 1.0 && area.y > 0.9, "area {area:?}");
        assert_eq!(area.x, 1.0);

        let main = &rec.fills[3];
        assert!((main.first - DVec2::new(0.5, area.y)).length() < 1e-12);
        let shapes_top_px = (1.0 - area.y) as f32 * 800.0;
        assert!(rec.rects > 0);
        assert!(
            rec.rect_bottom < shapes_top_px,
            "title bottom {} overlaps shapes at {shapes_top_px}",
            rec.rect_bottom
        );
    }

    #[test]
    fn only_glowing_titles_shrink_the_drawing_area() {
        assert_eq!(drawing_area(800, Style::Standard, "Poster", &canvas()), DVec2::ONE);
        assert_eq!(drawing_area(800, Style::Glowing, "", &canvas()), DVec2::ONE);

        let layers = plan_layers(&PosterConfig::standard().with_layer_count(2));
        let mut rec = Recorder::default();
        composite(&mut rec, &layers, Style::Standard, "Poster", &canvas());
        for (fill, layer) in rec.fills.iter().zip(&layers) {
            assert_eq!(fill.first, layer.outline().points()[0]);
        }
    }

    #[test]
    fn title_is_drawn_after_layers() {
        struct Order(Vec<&'static str>);
        impl Surface for Order {
            fn size(&self) -> (u32, u32) {
                (100, 100)
            }
            fn fill_outline(&mut self, _: &Outline, _: Srgb, _: f64) {
                self.0.push("outline");
            }
            fn fill_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Srgb, _: f64) {
                self.0.push("rect");
            }
        }

        let layers = plan_layers(&PosterConfig::glowing().with_layer_count(1));
        let mut order = Order(Vec::new());
        composite(&mut order, &layers, Style::Glowing, "A", &canvas());
        let first_rect = order.0.iter().position(|s| *s == "rect").unwrap();
        assert_eq!(first_rect, 4);
        assert!(order.0[first_rect..].iter().all(|s| *s == "rect"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fill_count_is_passes_times_layers(seed: u64, count in 0_usize..12, glowing: bool) {
                let base = if glowing { PosterConfig::glowing() } else { PosterConfig::standard() };
                let config = base
                    .with_layer_count(count)
                    .with_seed(seed);
                let layers = plan_layers(&config);
                let mut rec = Recorder::default();
                let fills = composite(&mut rec, &layers, config.style, "", &canvas());
                let per_layer = if glowing { GLOW_PASSES.len() } else { 1 };
                prop_assert_eq!(fills, count * per_layer);
                prop_assert_eq!(rec.fills.len(), fills);
            }
        }
    }
}
