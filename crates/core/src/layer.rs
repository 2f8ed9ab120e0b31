//! Planned layer: one filled shape with its color, opacity, and depth.

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::geometry::Outline;

/// One filled shape in back-to-front order.
///
/// Layers are immutable once planned. `depth` is the render position
/// (0 = bottom) and, in the glowing style, also determines `alpha`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    outline: Outline,
    color: Srgb,
    alpha: f64,
    depth: usize,
}

impl Layer {
    /// Creates a layer. `alpha` is clamped to [0.0, 1.0].
    pub fn new(outline: Outline, color: Srgb, alpha: f64, depth: usize) -> Self {
        Self {
            outline,
            color,
            alpha: alpha.clamp(0.0, 1.0),
            depth,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn color(&self) -> Srgb {
        self.color
    }

    /// Opacity of the main fill.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn triangle() -> Outline {
        Outline::new(vec![
            DVec2::new(0.1, 0.1),
            DVec2::new(0.9, 0.1),
            DVec2::new(0.5, 0.9),
        ])
    }

    #[test]
    fn new_keeps_fields() {
        let layer = Layer::new(triangle(), Srgb::WHITE, 0.4, 3);
        assert_eq!(layer.outline().len(), 3);
        assert_eq!(layer.color(), Srgb::WHITE);
        assert_eq!(layer.alpha(), 0.4);
        assert_eq!(layer.depth(), 3);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Layer::new(triangle(), Srgb::BLACK, 1.7, 0).alpha(), 1.0);
        assert_eq!(Layer::new(triangle(), Srgb::BLACK, -0.2, 0).alpha(), 0.0);
    }

    #[test]
    fn serde_round_trip() {
        let layer = Layer::new(triangle(), Srgb::from_hex("#336699").unwrap(), 0.5, 1);
        let json = serde_json::to_string(&layer).unwrap();
        let restored: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(layer, restored);
    }
}
