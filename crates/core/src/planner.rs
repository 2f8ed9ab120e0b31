//! Seeded layer planning.
//!
//! Planning draws from a single [`Xorshift64`] stream in a fixed order: the
//! whole palette first, then one pass per layer in ascending depth. Within a
//! layer the order is center x, center y, radius, wobble (glowing only),
//! one draw per outline point, color index, alpha (standard only). Changing
//! this order changes every poster for every seed.

use glam::DVec2;
use log::{debug, trace};

use crate::config::{PosterConfig, Style};
use crate::geometry::{generate_outline, DEFAULT_POINT_COUNT};
use crate::layer::Layer;
use crate::palette::{generate_palette, DEFAULT_BASE_HUE};
use crate::prng::Xorshift64;

const RADIUS_RANGE: (f64, f64) = (0.15, 0.45);
const GLOWING_WOBBLE_RANGE: (f64, f64) = (0.08, 0.20);
const STANDARD_ALPHA_RANGE: (f64, f64) = (0.3, 0.6);
const GLOWING_BASE_ALPHA: f64 = 0.5;
const GLOWING_ALPHA_STEP: f64 = 0.08;

/// Plans every layer of `config`, seeding a fresh stream from `config.seed`.
pub fn plan_layers(config: &PosterConfig) -> Vec<Layer> {
    let mut rng = Xorshift64::new(config.seed);
    plan_layers_with(config, &mut rng)
}

/// Plans every layer of `config`, drawing from a caller-owned stream.
///
/// The result is returned in ascending depth, which is also render order.
pub fn plan_layers_with(config: &PosterConfig, rng: &mut Xorshift64) -> Vec<Layer> {
    let palette = generate_palette(
        config.style.palette_size(),
        config.palette_mode,
        DEFAULT_BASE_HUE,
        rng,
    );
    debug!(
        "planning {} {} layers (seed {}, {} palette of {})",
        config.layer_count,
        config.style,
        config.seed,
        config.palette_mode,
        palette.len()
    );

    (0..config.layer_count)
        .map(|depth| {
            let center = DVec2::new(rng.next_f64(), rng.next_f64());
            let radius = rng.next_range(RADIUS_RANGE.0, RADIUS_RANGE.1);
            let wobble = match config.style {
                Style::Standard => config.wobble,
                Style::Glowing => rng.next_range(GLOWING_WOBBLE_RANGE.0, GLOWING_WOBBLE_RANGE.1),
            };
            let outline = generate_outline(
                config.shape,
                center,
                radius,
                DEFAULT_POINT_COUNT,
                wobble,
                rng,
            );
            let color = palette.choose(rng);
            let alpha = match config.style {
                Style::Standard => rng.next_range(STANDARD_ALPHA_RANGE.0, STANDARD_ALPHA_RANGE.1),
                Style::Glowing => glowing_alpha(depth),
            };
            trace!("layer {depth}: center {center}, radius {radius:.3}, alpha {alpha:.3}");
            Layer::new(outline, color, alpha, depth)
        })
        .collect()
}

/// Main-fill opacity for the glowing style: rises with depth, capped at 1.
pub fn glowing_alpha(depth: usize) -> f64 {
    (GLOWING_BASE_ALPHA + depth as f64 * GLOWING_ALPHA_STEP).min(1.0)
}
