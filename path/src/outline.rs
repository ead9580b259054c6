// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use tiny_skia_path::{Path, Point};

use crate::round_corners;

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_skia_path::NoStdFloat;

/// A fixed inset, as a fraction of the view width, subtracted from the outline radius.
///
/// Keeps the border away from the view edges. Not configurable.
pub const FIXED_INSET_RATIO: f32 = 0.05;

/// The smallest side count that produces a polygon.
///
/// Anything below is drawn as a horizontal line instead.
pub const MIN_SIDES: u32 = 4;

/// Angle of the first vertex, in radians.
///
/// The first vertex is always directly above the center.
pub const START_ANGLE: f32 = -core::f32::consts::FRAC_PI_2;

/// A regular polygon outline.
///
/// Vertices are placed on a circle around the view center, starting at the top
/// and going counter-clockwise on screen (angles decrease with the vertex index).
///
/// # Guarantees
///
/// - There are exactly `sides` vertices and `sides >= 4`.
/// - All vertices are `radius` away from `center`.
/// - `radius` is finite and >= 0.
#[derive(Clone, PartialEq, Debug)]
pub struct Outline {
    center: Point,
    radius: f32,
    points: Vec<Point>,
}

impl Outline {
    /// Builds an outline for a `width` x `height` view.
    ///
    /// The radius is `width / 2 - padding - width * FIXED_INSET_RATIO`, clamped to zero.
    /// Note that the height only affects the center position.
    ///
    /// Returns `None` when:
    ///
    /// - `sides` is less than [`MIN_SIDES`]
    /// - `width` or `height` is not positive or not finite
    /// - `padding` is not finite
    pub fn new(width: f32, height: f32, sides: u32, padding: f32) -> Option<Self> {
        if sides < MIN_SIDES {
            return None;
        }

        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return None;
        }

        if !padding.is_finite() {
            return None;
        }

        let center = Point::from_xy(width * 0.5, height * 0.5);
        let radius = (width * 0.5 - padding - width * FIXED_INSET_RATIO).max(0.0);

        let section = -core::f32::consts::PI * 2.0 / sides as f32;
        let mut points = Vec::with_capacity(sides as usize);
        for i in 0..sides {
            let angle = START_ANGLE + section * i as f32;
            points.push(Point::from_xy(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        Some(Outline {
            center,
            radius,
            points,
        })
    }

    /// Returns the outline center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the circumscribed circle radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the number of sides.
    pub fn sides(&self) -> u32 {
        self.points.len() as u32
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks that the outline has no vertices.
    ///
    /// Always `false`. Added for API consistency.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Checks that the radius was clamped to zero.
    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }

    /// Converts the outline into a closed path.
    ///
    /// Returns `None` for a degenerate outline, since there is nothing to fill or stroke.
    pub fn to_path(&self) -> Option<Path> {
        if self.is_degenerate() {
            return None;
        }

        round_corners(&self.points, true, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn distance(a: Point, b: Point) -> f32 {
        ((a.x - b.x) * (a.x - b.x) + (a.y - b.y) * (a.y - b.y)).sqrt()
    }

    #[test]
    fn hexagon() {
        let outline = Outline::new(200.0, 200.0, 6, 0.0).unwrap();
        assert_eq!(outline.len(), 6);
        assert_eq!(outline.center(), Point::from_xy(100.0, 100.0));
        assert_abs_diff_eq!(outline.radius(), 90.0);

        let first = outline.points()[0];
        assert_abs_diff_eq!(first.x, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(first.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn diamond() {
        let outline = Outline::new(100.0, 50.0, 4, 0.0).unwrap();
        assert_eq!(outline.len(), 4);
        assert_eq!(outline.center(), Point::from_xy(50.0, 25.0));
        assert_abs_diff_eq!(outline.radius(), 45.0);

        // Top, left, bottom, right.
        let expected: [(f32, f32); 4] = [(50.0, -20.0), (5.0, 25.0), (50.0, 70.0), (95.0, 25.0)];
        for (p, (x, y)) in outline.points().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(p.x, *x, epsilon = 1e-4);
            assert_abs_diff_eq!(p.y, *y, epsilon = 1e-4);
        }
    }

    #[test]
    fn vertices_on_circle() {
        for sides in 4..=32 {
            let outline = Outline::new(240.0, 130.0, sides, 7.5).unwrap();
            assert_eq!(outline.sides(), sides);
            for p in outline.points() {
                assert_abs_diff_eq!(distance(*p, outline.center()), outline.radius(), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn equal_central_angles() {
        for sides in 4..=24 {
            let outline = Outline::new(300.0, 300.0, sides, 0.0).unwrap();
            let c = outline.center();
            let expected = core::f32::consts::PI * 2.0 / sides as f32;
            let n = outline.len();
            for i in 0..n {
                let a = outline.points()[i];
                let b = outline.points()[(i + 1) % n];
                let angle_a = (a.y - c.y).atan2(a.x - c.x);
                let angle_b = (b.y - c.y).atan2(b.x - c.x);
                let mut delta = angle_a - angle_b;
                if delta < 0.0 {
                    delta += core::f32::consts::PI * 2.0;
                }

                assert_abs_diff_eq!(delta, expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn deterministic() {
        let a = Outline::new(123.0, 77.0, 9, 3.25).unwrap();
        let b = Outline::new(123.0, 77.0, 9, 3.25).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn not_a_polygon() {
        for sides in 0..MIN_SIDES {
            assert!(Outline::new(100.0, 100.0, sides, 0.0).is_none());
        }
    }

    #[test]
    fn invalid_size() {
        assert!(Outline::new(0.0, 100.0, 5, 0.0).is_none());
        assert!(Outline::new(100.0, -1.0, 5, 0.0).is_none());
        assert!(Outline::new(f32::NAN, 100.0, 5, 0.0).is_none());
        assert!(Outline::new(100.0, f32::INFINITY, 5, 0.0).is_none());
        assert!(Outline::new(100.0, 100.0, 5, f32::NAN).is_none());
    }

    #[test]
    fn large_padding_is_clamped() {
        let outline = Outline::new(100.0, 100.0, 5, 80.0).unwrap();
        assert_eq!(outline.radius(), 0.0);
        assert!(outline.is_degenerate());
        assert!(outline.points().iter().all(|p| *p == outline.center()));
        assert!(outline.to_path().is_none());
    }

    #[test]
    fn negative_padding_grows_radius() {
        let outline = Outline::new(100.0, 100.0, 5, -10.0).unwrap();
        assert_abs_diff_eq!(outline.radius(), 55.0);
    }

    #[test]
    fn closed_path() {
        let outline = Outline::new(100.0, 100.0, 5, 0.0).unwrap();
        let path = outline.to_path().unwrap();
        assert_eq!(path.points(), outline.points());

        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 6);
        assert_eq!(
            segments.last(),
            Some(&tiny_skia_path::PathSegment::Close)
        );
    }
}
