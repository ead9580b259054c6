// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

// Based on SkCornerPathEffect, limited to polylines.

use tiny_skia_path::{Path, PathBuilder, Point};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use tiny_skia_path::NoStdFloat;

/// Builds a polyline path with rounded corners.
///
/// Every corner is replaced with a quadratic curve that uses the corner as a control point.
/// The curve starts and ends `radius` away from the corner, but never further than
/// half of the adjoining segment.
///
/// An open polyline keeps its first and last points.
/// When `radius` is not positive or not finite, a plain polyline is returned.
///
/// Returns `None` when there are less than two points or a point is not finite.
pub fn round_corners(points: &[Point], closed: bool, radius: f32) -> Option<Path> {
    if points.len() < 2 || !points.iter().all(|p| p.is_finite()) {
        return None;
    }

    if !(radius > 0.0 && radius.is_finite()) {
        return polyline(points, closed);
    }

    if closed {
        rounded_closed(points, radius)
    } else {
        rounded_open(points, radius)
    }
}

fn polyline(points: &[Point], closed: bool) -> Option<Path> {
    let mut pb = PathBuilder::with_capacity(points.len() + 1, points.len());
    pb.move_to(points[0].x, points[0].y);
    for p in &points[1..] {
        pb.line_to(p.x, p.y);
    }

    if closed {
        pb.close();
    }

    pb.finish()
}

fn rounded_closed(points: &[Point], radius: f32) -> Option<Path> {
    let len = points.len();
    let mut pb = PathBuilder::with_capacity(len * 2 + 2, len * 3 + 1);

    // Segment `i` goes from `points[i]` to `points[i + 1]`, wrapping around.
    let first = corner_step(points[0], points[1 % len], radius);
    pb.move_to(points[0].x + first.step.x, points[0].y + first.step.y);

    let mut current = first;
    for i in 0..len {
        let corner = points[(i + 1) % len];
        if current.draw_segment {
            pb.line_to(corner.x - current.step.x, corner.y - current.step.y);
        }

        let next = if i + 1 == len {
            first
        } else {
            corner_step(corner, points[(i + 2) % len], radius)
        };

        pb.quad_to(
            corner.x,
            corner.y,
            corner.x + next.step.x,
            corner.y + next.step.y,
        );
        current = next;
    }

    pb.close();
    pb.finish()
}

fn rounded_open(points: &[Point], radius: f32) -> Option<Path> {
    let len = points.len();
    let mut pb = PathBuilder::with_capacity(len * 2, len * 3);
    pb.move_to(points[0].x, points[0].y);

    for i in 1..len - 1 {
        let prev = points[i - 1];
        let corner = points[i];
        let next = points[i + 1];

        let incoming = corner_step(prev, corner, radius);
        let outgoing = corner_step(corner, next, radius);

        pb.line_to(corner.x - incoming.step.x, corner.y - incoming.step.y);
        pb.quad_to(
            corner.x,
            corner.y,
            corner.x + outgoing.step.x,
            corner.y + outgoing.step.y,
        );
    }

    let last = points[len - 1];
    pb.line_to(last.x, last.y);
    pb.finish()
}

#[derive(Clone, Copy, Debug)]
struct CornerStep {
    step: Point,
    // `false` when the curves on both ends of a segment meet in its middle.
    draw_segment: bool,
}

fn corner_step(a: Point, b: Point, radius: f32) -> CornerStep {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist <= radius * 2.0 {
        CornerStep {
            step: Point::from_xy(dx * 0.5, dy * 0.5),
            draw_segment: false,
        }
    } else {
        let scale = radius / dist;
        CornerStep {
            step: Point::from_xy(dx * scale, dy * scale),
            draw_segment: true,
        }
    }
}
