//! Wobbly closed outlines for the supported shape kinds.
//!
//! Coordinates are normalized: the poster's drawable area spans [0, 1] on
//! both axes with y pointing up. Outlines are implicitly closed, so the last
//! point connects back to the first when filled.

use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::ShapeKind;
use crate::prng::Xorshift64;

/// Number of points every planned outline is sampled with.
pub const DEFAULT_POINT_COUNT: usize = 200;

/// An ordered, implicitly closed sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<DVec2>,
}

impl Outline {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a copy shifted by `offset`.
    pub fn translated(&self, offset: DVec2) -> Outline {
        Outline {
            points: self.points.iter().map(|&p| p + offset).collect(),
        }
    }

    /// Returns a copy scaled per axis about the origin.
    pub fn scaled(&self, factor: DVec2) -> Outline {
        Outline {
            points: self.points.iter().map(|&p| p * factor).collect(),
        }
    }

    /// Mean of all points, or `None` for an empty outline.
    pub fn centroid(&self) -> Option<DVec2> {
        if self.points.is_empty() {
            return None;
        }
        let sum: DVec2 = self.points.iter().copied().sum();
        Some(sum / self.points.len() as f64)
    }
}

/// Generates an outline of `shape` around `center`.
///
/// Draws exactly one uniform value from `rng` per point for the wobble
/// factor `1 + wobble * (U - 0.5)`. A non-positive `radius` gives a
/// degenerate outline rather than an error; fewer than 3 points is not a
/// fillable polygon.
pub fn generate_outline(
    shape: ShapeKind,
    center: DVec2,
    radius: f64,
    point_count: usize,
    wobble: f64,
    rng: &mut Xorshift64,
) -> Outline {
    let points = (0..point_count)
        .map(|i| {
            let t = TAU * i as f64 / point_count as f64;
            let factor = 1.0 + wobble * (rng.next_f64() - 0.5);
            center + radius * factor * unit_point(shape, t)
        })
        .collect();
    Outline { points }
}

/// Unit-scale curve point at parameter `t`.
fn unit_point(shape: ShapeKind, t: f64) -> DVec2 {
    match shape {
        ShapeKind::Blob => DVec2::new(t.cos(), t.sin()),
        ShapeKind::Heart => {
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            DVec2::new(x, y) / 16.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: DVec2 = DVec2::new(0.5, 0.5);

    #[test]
    fn outline_has_requested_point_count() {
        let mut rng = Xorshift64::new(1);
        for shape in [ShapeKind::Blob, ShapeKind::Heart] {
            for n in [3, 7, 200] {
                let outline = generate_outline(shape, CENTER, 0.3, n, 0.15, &mut rng);
                assert_eq!(outline.len(), n, "{shape:?} with {n} points");
            }
        }
    }

    #[test]
    fn outline_consumes_one_draw_per_point() {
        let mut rng = Xorshift64::new(21);
        let mut reference = Xorshift64::new(21);
        generate_outline(ShapeKind::Heart, CENTER, 0.3, 50, 0.1, &mut rng);
        for _ in 0..50 {
            reference.next_u64();
        }
        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    #[test]
    fn zero_wobble_blob_is_a_circle() {
        let mut rng = Xorshift64::new(2);
        let outline = generate_outline(ShapeKind::Blob, CENTER, 0.25, 64, 0.0, &mut rng);
        for p in outline.points() {
            assert!(((*p - CENTER).length() - 0.25).abs() < 1e-12, "point {p}");
        }
    }

    #[test]
    fn blob_angles_are_half_open() {
        let mut rng = Xorshift64::new(2);
        let outline = generate_outline(ShapeKind::Blob, DVec2::ZERO, 1.0, 4, 0.0, &mut rng);
        let pts = outline.points();
        assert!((pts[0] - DVec2::new(1.0, 0.0)).length() < 1e-12);
        assert!((pts[1] - DVec2::new(0.0, 1.0)).length() < 1e-12);
        assert!((pts[3] - DVec2::new(0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn zero_wobble_heart_matches_classic_curve() {
        let mut rng = Xorshift64::new(4);
        let outline = generate_outline(ShapeKind::Heart, DVec2::ZERO, 1.0, 4, 0.0, &mut rng);
        let pts = outline.points();
        // t=0: (0, (13-5-2-1)/16); t=pi: (0, (-13-5+2-1)/16)
        assert!((pts[0] - DVec2::new(0.0, 5.0 / 16.0)).length() < 1e-12);
        assert!((pts[2] - DVec2::new(0.0, -17.0 / 16.0)).length() < 1e-12);
        // t=pi/2: (16/16, (0 + 5 - 0 - 1)/16)
        assert!((pts[1] - DVec2::new(1.0, 4.0 / 16.0)).length() < 1e-12);
    }

    #[test]
    fn scaled_squashes_each_axis_independently() {
        let outline = Outline::new(vec![DVec2::new(0.5, 1.0), DVec2::new(1.0, 0.0)]);
        let squashed = outline.scaled(DVec2::new(1.0, 0.9));
        assert_eq!(squashed.points(), &[DVec2::new(0.5, 0.9), DVec2::new(1.0, 0.0)]);
    }

    #[test]
    fn zero_radius_is_degenerate_not_error() {
        let mut rng = Xorshift64::new(9);
        let outline = generate_outline(ShapeKind::Blob, CENTER, 0.0, 200, 0.15, &mut rng);
        assert_eq!(outline.len(), 200);
        assert!(outline.points().iter().all(|p| *p == CENTER));
    }

    #[test]
    fn translated_shifts_every_point() {
        let outline = Outline::new(vec![DVec2::new(0.1, 0.2), DVec2::new(0.3, 0.4)]);
        let moved = outline.translated(DVec2::new(0.008, -0.008));
        for (a, b) in outline.points().iter().zip(moved.points()) {
            assert!((*b - *a - DVec2::new(0.008, -0.008)).length() < 1e-15);
        }
    }

    #[test]
    fn centroid_of_empty_outline_is_none() {
        assert!(Outline::new(Vec::new()).centroid().is_none());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn blob_points_stay_within_wobble_bounds(
                seed: u64,
                cx in 0.0_f64..1.0,
                cy in 0.0_f64..1.0,
                radius in 0.15_f64..0.45,
                wobble in 0.0_f64..0.3,
            ) {
                let mut rng = Xorshift64::new(seed);
                let center = DVec2::new(cx, cy);
                let outline = generate_outline(ShapeKind::Blob, center, radius, 200, wobble, &mut rng);
                prop_assert_eq!(outline.len(), 200);
                let reach = radius * (1.0 + wobble / 2.0) + 1e-12;
                for p in outline.points() {
                    prop_assert!((p.x - cx).abs() <= reach, "x={} outside reach {reach}", p.x);
                    prop_assert!((p.y - cy).abs() <= reach, "y={} outside reach {reach}", p.y);
                }
            }
        }
    }
}
