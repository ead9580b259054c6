// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{
    FillRule, FilterQuality, Mask, Path, PathBuilder, Pixmap, PixmapMut, PixmapPaint, Point,
    Transform,
};

use polygon_view_path::{round_corners, Outline, MIN_SIDES};

use crate::blur::blur;
use crate::paint::{BorderStyle, FillStyle, ShadowStyle};
use crate::PolygonAttributes;

/// What a view draws for a given size.
#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    /// A regular polygon.
    Polygon(Outline),
    /// A horizontal line through the view center.
    ///
    /// Used when there are not enough sides for a polygon.
    Midline {
        /// Left end.
        from: Point,
        /// Right end.
        to: Point,
    },
}

impl Shape {
    /// Picks a shape for a `width` x `height` view.
    ///
    /// Returns `None` when a polygon cannot be built. See [`Outline::new`].
    pub fn new(width: f32, height: f32, sides: u32, padding: f32) -> Option<Self> {
        if sides < MIN_SIDES {
            let y = height * 0.5;
            return Some(Shape::Midline {
                from: Point::from_xy(0.0, y),
                to: Point::from_xy(width, y),
            });
        }

        Outline::new(width, height, sides, padding).map(Shape::Polygon)
    }
}

/// Draws a polygon view onto the pixmap.
///
/// Layers, from bottom to top:
///
/// 1. the background colour fill
/// 2. the background image, clipped to the fill
/// 3. the border shadow
/// 4. the border
///
/// A line only gets the last two.
///
/// Never fails. Anything that cannot be drawn is skipped.
pub fn draw(attrs: &PolygonAttributes, pixmap: &mut PixmapMut) {
    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;

    let shape = match Shape::new(width, height, attrs.sides, attrs.padding) {
        Some(v) => v,
        None => {
            tracing::debug!("a polygon cannot be built with padding {}", attrs.padding);
            return;
        }
    };

    let fill = FillStyle::new(attrs);
    let border = BorderStyle::new(attrs);

    match shape {
        Shape::Polygon(ref outline) => {
            tracing::trace!("drawing a {}-sided polygon in {}x{}", outline.sides(), width, height);
            draw_polygon(
                pixmap,
                outline,
                attrs.background_image.as_ref(),
                attrs.bitmap_rotation,
                &fill,
                &border,
            );
        }
        Shape::Midline { from, to } => {
            tracing::trace!("drawing a line in {}x{}", width, height);
            draw_midline(pixmap, from, to, &border);
        }
    }
}

fn draw_polygon(
    pixmap: &mut PixmapMut,
    outline: &Outline,
    image: Option<&Pixmap>,
    rotation: i32,
    fill: &FillStyle,
    border: &BorderStyle,
) {
    if outline.is_degenerate() {
        tracing::debug!("polygon radius is clamped to zero, nothing to draw");
        return;
    }

    if let Some(path) = round_corners(outline.points(), true, fill.corner_radius) {
        pixmap.fill_path(&path, &fill.paint, FillRule::Winding, Transform::identity(), None);

        if let Some(image) = image {
            draw_image(pixmap, image, rotation, &path);
        }
    }

    if let Some(path) = round_corners(outline.points(), true, border.corner_radius) {
        draw_border(pixmap, &path, border);
    }
}

fn draw_midline(pixmap: &mut PixmapMut, from: Point, to: Point, border: &BorderStyle) {
    let mut pb = PathBuilder::with_capacity(2, 2);
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    if let Some(path) = pb.finish() {
        draw_border(pixmap, &path, border);
    }
}

fn draw_image(pixmap: &mut PixmapMut, image: &Pixmap, rotation: i32, clip_path: &Path) {
    let mut mask = match Mask::new(pixmap.width(), pixmap.height()) {
        Some(v) => v,
        None => return,
    };
    mask.fill_path(clip_path, FillRule::Winding, true, Transform::identity());

    let ts = image_transform(image, pixmap.width(), pixmap.height(), rotation);

    let paint = PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    };
    pixmap.draw_pixmap(0, 0, image.as_ref(), &paint, ts, Some(&mask));
}

/// Stretches an image to the view size and rotates it around the origin.
///
/// The rotated image bounds are then moved back to the origin, so the image
/// always starts at the top-left corner of the view.
pub(crate) fn image_transform(image: &Pixmap, width: u32, height: u32, rotation: i32) -> Transform {
    let width = width as f32;
    let height = height as f32;
    let sx = width / image.width() as f32;
    let sy = height / image.height() as f32;

    let angle = (rotation as f32).to_radians();
    let (sin, cos) = angle.sin_cos();

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    for (x, y) in [(0.0, 0.0), (width, 0.0), (0.0, height), (width, height)].iter().copied() {
        min_x = min_x.min(x * cos - y * sin);
        min_y = min_y.min(x * sin + y * cos);
    }

    Transform::from_scale(sx, sy)
        .post_rotate(rotation as f32)
        .post_translate(-min_x, -min_y)
}

fn draw_border(pixmap: &mut PixmapMut, path: &Path, border: &BorderStyle) {
    if let Some(shadow) = border.shadow {
        draw_shadow(pixmap, path, border, shadow);
    }

    pixmap.stroke_path(path, &border.paint, &border.stroke, Transform::identity(), None);
}

fn draw_shadow(pixmap: &mut PixmapMut, path: &Path, border: &BorderStyle, shadow: ShadowStyle) {
    let mut layer = match Pixmap::new(pixmap.width(), pixmap.height()) {
        Some(v) => v,
        None => return,
    };

    let mut paint = border.paint.clone();
    paint.set_color(shadow.colour);
    layer.stroke_path(path, &paint, &border.stroke, Transform::identity(), None);

    blur(&mut layer, shadow.sigma);

    pixmap.draw_pixmap(
        0,
        0,
        layer.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn midline_for_few_sides() {
        for sides in 0..MIN_SIDES {
            let shape = Shape::new(100.0, 50.0, sides, 0.0).unwrap();
            assert_eq!(
                shape,
                Shape::Midline {
                    from: Point::from_xy(0.0, 25.0),
                    to: Point::from_xy(100.0, 25.0),
                }
            );
        }
    }

    #[test]
    fn midline_ignores_padding() {
        let shape = Shape::new(100.0, 50.0, 2, f32::NAN).unwrap();
        assert!(matches!(shape, Shape::Midline { .. }));
    }

    #[test]
    fn polygon_for_many_sides() {
        match Shape::new(200.0, 200.0, 6, 0.0).unwrap() {
            Shape::Polygon(outline) => {
                assert_eq!(outline.len(), 6);
                assert_abs_diff_eq!(outline.radius(), 90.0);
            }
            _ => panic!("expected a polygon"),
        }
    }

    #[test]
    fn image_transform_without_rotation() {
        let image = Pixmap::new(10, 20).unwrap();
        let ts = image_transform(&image, 100, 100, 0);
        assert_abs_diff_eq!(ts.sx, 10.0);
        assert_abs_diff_eq!(ts.sy, 5.0);
        assert_abs_diff_eq!(ts.tx, 0.0);
        assert_abs_diff_eq!(ts.ty, 0.0);
    }

    #[test]
    fn image_transform_quarter_turn() {
        let image = Pixmap::new(100, 50).unwrap();
        let ts = image_transform(&image, 100, 50, 90);

        // The rotated image spans x in -50..0, so it has to be moved right.
        let mut points = [Point::from_xy(0.0, 0.0), Point::from_xy(100.0, 50.0)];
        ts.map_points(&mut points);
        assert_abs_diff_eq!(points[0].x, 50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[1].x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[1].y, 100.0, epsilon = 1e-4);
    }
}
